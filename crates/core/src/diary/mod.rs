//! Diary module - domain models, services, and traits.

mod diary_model;
mod diary_service;
mod diary_traits;

pub use diary_model::{DiaryConfig, DiaryEntry, NewDiaryEntry};
pub use diary_service::DiaryService;
pub use diary_traits::{DiaryRepositoryTrait, DiaryServiceTrait};
