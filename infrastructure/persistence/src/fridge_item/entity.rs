use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::fridge_item::model::FridgeItem;
use business::domain::fridge_item::value_objects::EatenStatus;
use business::domain::shared::value_objects::CreatedBy;

#[derive(Debug, FromRow)]
pub struct FridgeItemEntity {
    pub id: Uuid,
    pub name: String,
    pub expiry_date: NaiveDate,
    pub opened_date: Option<NaiveDate>,
    pub use_within_days: Option<i32>,
    pub eaten_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

impl FridgeItemEntity {
    /// Rows with a blank `created_by` are rejected; a non-positive duration
    /// or unknown status is read as absent or `fresh`.
    pub fn into_domain(self) -> Result<FridgeItem, RepositoryError> {
        let created_by = CreatedBy::new(self.created_by).ok_or(RepositoryError::Persistence)?;

        Ok(FridgeItem::from_repository(
            self.id,
            self.name,
            self.expiry_date,
            self.opened_date,
            self.use_within_days
                .and_then(|d| u32::try_from(d).ok())
                .filter(|d| *d > 0),
            self.eaten_status
                .parse::<EatenStatus>()
                .unwrap_or(EatenStatus::Fresh),
            self.created_at,
            self.updated_at,
            created_by,
        ))
    }
}

/// Converts the domain duration into the `INTEGER` column type.
pub fn use_within_days_column(days: Option<u32>) -> Result<Option<i32>, RepositoryError> {
    days.map(i32::try_from)
        .transpose()
        .map_err(|_| RepositoryError::Persistence)
}
