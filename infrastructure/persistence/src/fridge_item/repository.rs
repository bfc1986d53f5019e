use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::fridge_item::model::FridgeItem;
use business::domain::fridge_item::repository::FridgeItemRepository;

use super::entity::{FridgeItemEntity, use_within_days_column};

const SELECT_COLUMNS: &str = "SELECT id, name, expiry_date, opened_date, use_within_days, eaten_status, created_at, updated_at, created_by FROM fridge_items";

pub struct FridgeItemRepositoryPostgres {
    pool: PgPool,
}

impl FridgeItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("fridge_items query failed: {}", e);
    RepositoryError::DatabaseError
}

#[async_trait]
impl FridgeItemRepository for FridgeItemRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<FridgeItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, FridgeItemEntity>(&format!(
            "{SELECT_COLUMNS} ORDER BY expiry_date ASC, created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<FridgeItem, RepositoryError> {
        let entity =
            sqlx::query_as::<_, FridgeItemEntity>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?
                .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn insert(&self, item: &FridgeItem) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO fridge_items (id, name, expiry_date, opened_date, use_within_days, eaten_status, created_at, updated_at, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.expiry_date)
        .bind(item.opened_date)
        .bind(use_within_days_column(item.use_within_days)?)
        .bind(item.eaten_status.to_string())
        .bind(item.created_at)
        .bind(item.updated_at)
        .bind(item.created_by.as_str())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(RepositoryError::Duplicated)
            }
            Err(e) => Err(database_error(e)),
        }
    }

    async fn update(&self, item: &FridgeItem) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE fridge_items SET
                name = $2,
                expiry_date = $3,
                opened_date = $4,
                use_within_days = $5,
                eaten_status = $6,
                updated_at = $7
            WHERE id = $1"#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.expiry_date)
        .bind(item.opened_date)
        .bind(use_within_days_column(item.use_within_days)?)
        .bind(item.eaten_status.to_string())
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM fridge_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
