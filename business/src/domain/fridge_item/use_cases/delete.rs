use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::fridge_item::errors::FridgeItemError;

pub struct DeleteFridgeItemParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteFridgeItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteFridgeItemParams) -> Result<(), FridgeItemError>;
}
