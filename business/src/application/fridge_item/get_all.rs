use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;

use crate::domain::fridge_item::errors::FridgeItemError;
use crate::domain::fridge_item::repository::FridgeItemRepository;
use crate::domain::fridge_item::use_cases::get_all::{
    GetAllFridgeItemsParams, GetAllFridgeItemsUseCase, TrackedFridgeItem,
};
use crate::domain::logger::Logger;

pub struct GetAllFridgeItemsUseCaseImpl {
    pub repository: Arc<dyn FridgeItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllFridgeItemsUseCase for GetAllFridgeItemsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllFridgeItemsParams,
    ) -> Result<Vec<TrackedFridgeItem>, FridgeItemError> {
        let today = params.today.unwrap_or_else(|| Local::now().date_naive());
        self.logger
            .info(&format!("Getting all fridge items as of {}", today));

        let items = match self.repository.get_all().await {
            Ok(items) => items,
            Err(e) => {
                self.logger
                    .error(&format!("Error fetching fridge items: {}", e));
                return Err(e.into());
            }
        };

        let tracked: Vec<TrackedFridgeItem> = items
            .into_iter()
            .map(|item| {
                let expiry = item.expiry_info(today);
                TrackedFridgeItem { item, expiry }
            })
            .collect();

        self.logger
            .info(&format!("Retrieved {} fridge items", tracked.len()));
        Ok(tracked)
    }
}
