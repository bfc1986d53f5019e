use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::FridgeItem;

#[async_trait]
pub trait FridgeItemRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<FridgeItem>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<FridgeItem, RepositoryError>;
    async fn insert(&self, item: &FridgeItem) -> Result<(), RepositoryError>;
    async fn update(&self, item: &FridgeItem) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
