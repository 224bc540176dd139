//! Service layer: validation and business rules between handlers and
//! repositories.

pub mod inventory;

pub use inventory::InventoryService;
