use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::fridge_item::errors::FridgeItemError;
use crate::domain::fridge_item::model::{FridgeItem, NewFridgeItemProps};
use crate::domain::fridge_item::repository::FridgeItemRepository;
use crate::domain::fridge_item::use_cases::create::{
    CreateFridgeItemParams, CreateFridgeItemUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateFridgeItemUseCaseImpl {
    pub repository: Arc<dyn FridgeItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateFridgeItemUseCase for CreateFridgeItemUseCaseImpl {
    async fn execute(
        &self,
        params: CreateFridgeItemParams,
    ) -> Result<FridgeItem, FridgeItemError> {
        self.logger
            .info(&format!("Creating fridge item: {}", params.name));

        let item = FridgeItem::new(NewFridgeItemProps {
            name: params.name,
            expiry_date: params.expiry_date,
            opened_date: params.opened_date,
            use_within_days: params.use_within_days,
            created_by: params.created_by,
        })?;

        if let Err(e) = self.repository.insert(&item).await {
            self.logger
                .error(&format!("Error adding fridge item {}: {}", item.id, e));
            return Err(e.into());
        }

        self.logger
            .info(&format!("Fridge item created with id: {}", item.id));
        Ok(item)
    }
}
