use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::fridge_item::errors::FridgeItemError;
use crate::domain::fridge_item::model::{FridgeItem, validate_name, validate_use_within_days};
use crate::domain::fridge_item::repository::FridgeItemRepository;
use crate::domain::fridge_item::use_cases::update::{
    UpdateFridgeItemParams, UpdateFridgeItemUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateFridgeItemUseCaseImpl {
    pub repository: Arc<dyn FridgeItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateFridgeItemUseCase for UpdateFridgeItemUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateFridgeItemParams,
    ) -> Result<FridgeItem, FridgeItemError> {
        self.logger
            .info(&format!("Updating fridge item: {}", params.id));

        if let Some(name) = &params.name {
            validate_name(name)?;
        }
        if let Some(use_within_days) = params.use_within_days {
            validate_use_within_days(use_within_days)?;
        }

        let existing = match self.repository.get_by_id(params.id).await {
            Ok(item) => item,
            Err(RepositoryError::NotFound) => return Err(FridgeItemError::NotFound),
            Err(e) => {
                self.logger
                    .error(&format!("Error loading fridge item {}: {}", params.id, e));
                return Err(e.into());
            }
        };

        let updated = FridgeItem::from_repository(
            existing.id,
            params.name.unwrap_or(existing.name),
            params.expiry_date.unwrap_or(existing.expiry_date),
            params.opened_date.unwrap_or(existing.opened_date),
            params.use_within_days.unwrap_or(existing.use_within_days),
            params.eaten_status.unwrap_or(existing.eaten_status),
            existing.created_at,
            chrono::Utc::now(),
            existing.created_by,
        );

        match self.repository.update(&updated).await {
            Ok(()) => {}
            // Deleted since it was loaded.
            Err(RepositoryError::NotFound) => return Err(FridgeItemError::NotFound),
            Err(e) => {
                self.logger
                    .error(&format!("Error updating fridge item {}: {}", updated.id, e));
                return Err(e.into());
            }
        }

        self.logger
            .info(&format!("Fridge item updated: {}", updated.id));
        Ok(updated)
    }
}
