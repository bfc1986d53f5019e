#[derive(Debug, thiserror::Error)]
pub enum FridgeItemError {
    #[error("fridge_item.name_empty")]
    NameEmpty,
    #[error("fridge_item.use_within_days_not_positive")]
    UseWithinDaysNotPositive,
    #[error("fridge_item.use_within_days_too_large")]
    UseWithinDaysTooLarge,
    #[error("fridge_item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
