pub mod db;
pub mod fridge_item {
    pub mod entity;
    pub mod repository;
}
