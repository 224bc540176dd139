//! Inventory service: business validation in front of the item repository.
//!
//! Methods check caller input against [`stockroom_core::inventory`] and
//! [`stockroom_core::pagination`], delegate one call to [`InventoryItemRepo`],
//! and convert storage failures into [`CoreError`] without dropping the
//! failure kind. Nothing here retries.

use stockroom_core::error::CoreError;
use stockroom_core::inventory::{
    validate_item_changes, validate_new_item, validate_threshold, ENTITY_INVENTORY_ITEM,
};
use stockroom_core::pagination::{total_pages, validate_page};
use stockroom_db::models::inventory_item::{
    CreateInventoryItem, InventoryItem, InventoryPage, StockLevel, UpdateInventoryItem,
};
use stockroom_db::repositories::InventoryItemRepo;
use stockroom_db::DbPool;

/// Handle to the inventory operations.
///
/// Cheaply cloneable; all clones share the same connection pool.
#[derive(Clone)]
pub struct InventoryService {
    pool: DbPool,
}

impl InventoryService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Underlying pool, for health checks and shutdown.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Add a new item. Requires a name, a SKU, `quantity >= 1` and `price > 0`.
    pub async fn add_item(
        &self,
        draft: &CreateInventoryItem,
    ) -> Result<InventoryItem, CoreError> {
        validate_new_item(&draft.name, &draft.sku, draft.quantity, draft.price)?;

        let item = InventoryItemRepo::insert(&self.pool, draft).await?;
        tracing::info!(id = item.id, sku = %item.sku, "Inventory item added");
        Ok(item)
    }

    /// Apply a partial update to the item with `sku`.
    ///
    /// Present fields must pass the same checks as [`Self::add_item`], except
    /// that the quantity may drop to zero.
    pub async fn edit_item(
        &self,
        sku: &str,
        changes: &UpdateInventoryItem,
    ) -> Result<InventoryItem, CoreError> {
        validate_item_changes(
            changes.name.as_deref(),
            changes.quantity,
            changes.price,
            changes.has_optional_changes(),
        )?;

        let item = InventoryItemRepo::update(&self.pool, sku, changes)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY_INVENTORY_ITEM, sku))?;
        tracing::info!(sku = %sku, quantity = item.quantity, "Inventory item updated");
        Ok(item)
    }

    /// Remove the item with `sku`. Returns whether anything was removed.
    pub async fn remove_item(&self, sku: &str) -> Result<bool, CoreError> {
        let deleted = InventoryItemRepo::delete(&self.pool, sku).await?;
        if deleted {
            tracing::info!(sku = %sku, "Inventory item removed");
        }
        Ok(deleted)
    }

    /// Look up an item by SKU. `None` is the ordinary no-match outcome.
    pub async fn find_item(&self, sku: &str) -> Result<Option<InventoryItem>, CoreError> {
        Ok(InventoryItemRepo::find_by_sku(&self.pool, sku).await?)
    }

    /// Every item in insertion order.
    pub async fn all_items(&self) -> Result<Vec<InventoryItem>, CoreError> {
        Ok(InventoryItemRepo::list_all(&self.pool).await?)
    }

    /// Name and quantity of items at or below `threshold`.
    pub async fn low_stock_report(&self, threshold: i64) -> Result<Vec<StockLevel>, CoreError> {
        validate_threshold(threshold)?;
        Ok(InventoryItemRepo::list_low_stock(&self.pool, threshold).await?)
    }

    /// Name and quantity of every item.
    pub async fn full_report(&self) -> Result<Vec<StockLevel>, CoreError> {
        Ok(InventoryItemRepo::report(&self.pool).await?)
    }

    /// One page of items plus the totals needed to render a pager.
    pub async fn page(&self, page: i64, per_page: i64) -> Result<InventoryPage, CoreError> {
        validate_page(page, per_page)?;

        let (items, total) = InventoryItemRepo::list_page(&self.pool, page, per_page).await?;
        Ok(InventoryPage {
            items,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
