//! SQLite storage implementation for diary entries.

mod model;
mod repository;

pub use model::{DiaryEntryDB, NewDiaryEntryDB};
pub use repository::DiaryRepository;
