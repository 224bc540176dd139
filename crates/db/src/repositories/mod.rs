//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod inventory_item_repo;

pub use inventory_item_repo::InventoryItemRepo;
