use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::fridge_item::errors::FridgeItemError;
use crate::domain::fridge_item::repository::FridgeItemRepository;
use crate::domain::fridge_item::use_cases::delete::{
    DeleteFridgeItemParams, DeleteFridgeItemUseCase,
};
use crate::domain::logger::Logger;

pub struct DeleteFridgeItemUseCaseImpl {
    pub repository: Arc<dyn FridgeItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteFridgeItemUseCase for DeleteFridgeItemUseCaseImpl {
    async fn execute(&self, params: DeleteFridgeItemParams) -> Result<(), FridgeItemError> {
        self.logger
            .info(&format!("Deleting fridge item: {}", params.id));

        match self.repository.get_by_id(params.id).await {
            Ok(_) => {}
            Err(RepositoryError::NotFound) => return Err(FridgeItemError::NotFound),
            Err(e) => {
                self.logger
                    .error(&format!("Error loading fridge item {}: {}", params.id, e));
                return Err(e.into());
            }
        }

        if let Err(e) = self.repository.delete(params.id).await {
            self.logger
                .error(&format!("Error deleting fridge item {}: {}", params.id, e));
            return Err(e.into());
        }

        self.logger
            .info(&format!("Fridge item deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fridge_item::model::FridgeItem;
    use crate::domain::fridge_item::value_objects::EatenStatus;
    use crate::domain::shared::value_objects::CreatedBy;
    use chrono::{NaiveDate, Utc};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub FridgeItemRepo {}

        #[async_trait]
        impl FridgeItemRepository for FridgeItemRepo {
            async fn get_all(&self) -> Result<Vec<FridgeItem>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<FridgeItem, RepositoryError>;
            async fn insert(&self, item: &FridgeItem) -> Result<(), RepositoryError>;
            async fn update(&self, item: &FridgeItem) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delete_existing_item() {
        let item_id = Uuid::new_v4();
        let mut mock_repo = MockFridgeItemRepo::new();

        mock_repo.expect_get_by_id().returning(move |_| {
            Ok(FridgeItem::from_repository(
                item_id,
                "Milk".to_string(),
                NaiveDate::from_ymd_opt(2025, 11, 5).unwrap(),
                None,
                None,
                EatenStatus::Fresh,
                Utc::now(),
                Utc::now(),
                CreatedBy::new("joe").unwrap(),
            ))
        });
        mock_repo
            .expect_delete()
            .withf(move |id| *id == item_id)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteFridgeItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteFridgeItemParams { id: item_id })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent() {
        let mut mock_repo = MockFridgeItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteFridgeItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteFridgeItemParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), FridgeItemError::NotFound));
    }

    #[tokio::test]
    async fn should_log_and_wrap_other_repository_errors() {
        let mut mock_repo = MockFridgeItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));
        mock_repo.expect_delete().never();

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_error().times(1).returning(|_| ());

        let use_case = DeleteFridgeItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(DeleteFridgeItemParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            FridgeItemError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
