pub mod inventory;
pub mod reports;
