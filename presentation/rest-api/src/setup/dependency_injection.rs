use std::sync::Arc;

use logger::TracingLogger;
use persistence::fridge_item::repository::FridgeItemRepositoryPostgres;

use business::application::fridge_item::create::CreateFridgeItemUseCaseImpl;
use business::application::fridge_item::delete::DeleteFridgeItemUseCaseImpl;
use business::application::fridge_item::get_all::GetAllFridgeItemsUseCaseImpl;
use business::application::fridge_item::update::UpdateFridgeItemUseCaseImpl;

use crate::api::expiry::routes::ExpiryApi;
use crate::api::fridge_item::routes::FridgeItemApi;
use crate::api::health::routes::Api as HealthApi;
use crate::config::inventory_config::InventoryConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub fridge_item_api: FridgeItemApi,
    pub expiry_api: ExpiryApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, inventory: InventoryConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let repository = Arc::new(FridgeItemRepositoryPostgres::new(pool));

        let create_use_case = Arc::new(CreateFridgeItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllFridgeItemsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateFridgeItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteFridgeItemUseCaseImpl { repository, logger });

        let fridge_item_api = FridgeItemApi::new(
            create_use_case,
            get_all_use_case,
            update_use_case,
            delete_use_case,
            inventory.created_by,
            inventory.severity,
        );

        Self {
            health_api: HealthApi::new(),
            fridge_item_api,
            expiry_api: ExpiryApi::new(inventory.severity),
        }
    }
}
