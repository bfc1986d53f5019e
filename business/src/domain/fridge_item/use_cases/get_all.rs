use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::fridge_item::errors::FridgeItemError;
use crate::domain::fridge_item::expiry::ExpiryInfo;
use crate::domain::fridge_item::model::FridgeItem;

pub struct GetAllFridgeItemsParams {
    /// Reference day for the expiry computation. Defaults to the local date.
    pub today: Option<NaiveDate>,
}

/// An item together with its day counts for the requested day.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedFridgeItem {
    pub item: FridgeItem,
    pub expiry: ExpiryInfo,
}

#[async_trait]
pub trait GetAllFridgeItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllFridgeItemsParams,
    ) -> Result<Vec<TrackedFridgeItem>, FridgeItemError>;
}
