//! Stockroom domain core.
//!
//! Pure domain logic with no IO: the error taxonomy shared by every layer,
//! id types, and the validation and pagination rules for inventory items.

pub mod error;
pub mod inventory;
pub mod pagination;
pub mod types;
