use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::fridge_item::errors::FridgeItemError;
use crate::domain::fridge_item::model::FridgeItem;
use crate::domain::fridge_item::value_objects::EatenStatus;

/// Partial update. `None` leaves a field untouched; for the optional fields
/// `Some(None)` clears the stored value.
#[derive(Default)]
pub struct UpdateFridgeItemParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub eaten_status: Option<EatenStatus>,
    pub opened_date: Option<Option<NaiveDate>>,
    pub use_within_days: Option<Option<u32>>,
}

#[async_trait]
pub trait UpdateFridgeItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateFridgeItemParams,
    ) -> Result<FridgeItem, FridgeItemError>;
}
