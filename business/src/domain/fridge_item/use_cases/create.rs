use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::fridge_item::errors::FridgeItemError;
use crate::domain::fridge_item::model::FridgeItem;
use crate::domain::shared::value_objects::CreatedBy;

pub struct CreateFridgeItemParams {
    pub name: String,
    pub expiry_date: NaiveDate,
    pub opened_date: Option<NaiveDate>,
    pub use_within_days: Option<u32>,
    pub created_by: CreatedBy,
}

#[async_trait]
pub trait CreateFridgeItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateFridgeItemParams,
    ) -> Result<FridgeItem, FridgeItemError>;
}
