//! Inventory item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockroom_core::types::DbId;

/// A row from the `inventory_items` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct InventoryItem {
    pub id: DbId,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub price: f64,
    pub category: Option<String>,
}

/// DTO for creating a new inventory item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventoryItem {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub price: f64,
    pub category: Option<String>,
}

/// DTO for updating an existing item. All fields are optional.
///
/// The fields of this struct are the complete set of mutable columns; `sku`
/// and `id` are not members, and unknown JSON keys are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateInventoryItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl UpdateInventoryItem {
    /// True if the update sets `description` or `category`.
    pub fn has_optional_changes(&self) -> bool {
        self.description.is_some() || self.category.is_some()
    }
}

/// Name and on-hand quantity of an item, used by stock reports.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct StockLevel {
    pub name: String,
    pub quantity: i64,
}

/// One page of inventory items plus the totals needed to render a pager.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryPage {
    pub items: Vec<InventoryItem>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}
