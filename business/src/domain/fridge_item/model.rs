use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::errors::FridgeItemError;
use super::expiry::{ExpiryInfo, compute_expiry_info};
use super::value_objects::EatenStatus;
use crate::domain::shared::value_objects::CreatedBy;

/// Longest accepted use-within duration, one hundred years.
pub const MAX_USE_WITHIN_DAYS: u32 = 36_500;

#[derive(Debug, Clone, PartialEq)]
pub struct FridgeItem {
    pub id: Uuid,
    pub name: String,
    pub expiry_date: NaiveDate,
    pub opened_date: Option<NaiveDate>,
    pub use_within_days: Option<u32>,
    pub eaten_status: EatenStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: CreatedBy,
}

pub struct NewFridgeItemProps {
    pub name: String,
    pub expiry_date: NaiveDate,
    pub opened_date: Option<NaiveDate>,
    pub use_within_days: Option<u32>,
    pub created_by: CreatedBy,
}

impl FridgeItem {
    pub fn new(props: NewFridgeItemProps) -> Result<Self, FridgeItemError> {
        validate_name(&props.name)?;
        validate_use_within_days(props.use_within_days)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            expiry_date: props.expiry_date,
            opened_date: props.opened_date,
            use_within_days: props.use_within_days,
            eaten_status: EatenStatus::Fresh,
            created_at: now,
            updated_at: now,
            created_by: props.created_by,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        expiry_date: NaiveDate,
        opened_date: Option<NaiveDate>,
        use_within_days: Option<u32>,
        eaten_status: EatenStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        created_by: CreatedBy,
    ) -> Self {
        Self {
            id,
            name,
            expiry_date,
            opened_date,
            use_within_days,
            eaten_status,
            created_at,
            updated_at,
            created_by,
        }
    }

    /// Day counts for this item relative to `today`.
    pub fn expiry_info(&self, today: NaiveDate) -> ExpiryInfo {
        compute_expiry_info(
            today,
            self.expiry_date,
            self.opened_date,
            self.use_within_days,
        )
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), FridgeItemError> {
    if name.trim().is_empty() {
        return Err(FridgeItemError::NameEmpty);
    }
    Ok(())
}

pub(crate) fn validate_use_within_days(days: Option<u32>) -> Result<(), FridgeItemError> {
    match days {
        Some(0) => Err(FridgeItemError::UseWithinDaysNotPositive),
        Some(d) if d > MAX_USE_WITHIN_DAYS => Err(FridgeItemError::UseWithinDaysTooLarge),
        _ => Ok(()),
    }
}
