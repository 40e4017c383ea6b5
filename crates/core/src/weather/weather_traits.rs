use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;
use crate::weather::WeatherSnapshot;

/// Trait for weather snapshot repository operations.
///
/// The core never updates or deletes snapshots; the contract is
/// intentionally append-and-read only.
#[async_trait]
pub trait WeatherSnapshotRepositoryTrait: Send + Sync {
    /// All snapshots stored for `date`, in storage order.
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<WeatherSnapshot>>;

    async fn save(&self, snapshot: WeatherSnapshot) -> Result<()>;
}
