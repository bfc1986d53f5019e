pub mod error;
pub mod expiry;
pub mod fridge_item;
pub mod health;
pub mod tags;
