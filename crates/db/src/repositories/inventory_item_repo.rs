//! Repository for the `inventory_items` table.
//!
//! Each method is a single statement (or a single read transaction for
//! [`InventoryItemRepo::list_page`]), so SQLite provides the atomicity and
//! write serialization. Business rules live in the service layer; this layer
//! only enforces what the schema enforces.

use sqlx::SqlitePool;
use stockroom_core::pagination::page_offset;

use crate::error::StoreError;
use crate::models::inventory_item::{
    CreateInventoryItem, InventoryItem, StockLevel, UpdateInventoryItem,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, sku, description, quantity, price, category";

/// Provides CRUD and reporting queries for inventory items.
pub struct InventoryItemRepo;

impl InventoryItemRepo {
    /// Insert a new item, returning the created row with its assigned id.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if the SKU already exists.
    pub async fn insert(
        pool: &SqlitePool,
        input: &CreateInventoryItem,
    ) -> Result<InventoryItem, StoreError> {
        let query = format!(
            "INSERT INTO inventory_items (name, sku, description, quantity, price, category)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(&input.name)
            .bind(&input.sku)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(input.price)
            .bind(&input.category)
            .fetch_one(pool)
            .await
            .map_err(|err| StoreError::from(err).for_sku(&input.sku))
    }

    /// Find an item by its SKU.
    pub async fn find_by_sku(
        pool: &SqlitePool,
        sku: &str,
    ) -> Result<Option<InventoryItem>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM inventory_items WHERE sku = ?");
        let item = sqlx::query_as::<_, InventoryItem>(&query)
            .bind(sku)
            .fetch_optional(pool)
            .await?;
        Ok(item)
    }

    /// List every item in insertion order (ascending id).
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<InventoryItem>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM inventory_items ORDER BY id ASC");
        let items = sqlx::query_as::<_, InventoryItem>(&query)
            .fetch_all(pool)
            .await?;
        Ok(items)
    }

    /// Count all items.
    pub async fn count(pool: &SqlitePool) -> Result<i64, StoreError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM inventory_items")
            .fetch_one(pool)
            .await?;
        Ok(total)
    }

    /// Fetch page `page` (1-based) of `per_page` items in ascending id order,
    /// together with the total item count.
    ///
    /// Both reads run in one transaction so the count matches the page it was
    /// taken with. A page past the end yields an empty vec.
    pub async fn list_page(
        pool: &SqlitePool,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<InventoryItem>, i64), StoreError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM inventory_items ORDER BY id ASC LIMIT ? OFFSET ?"
        );
        let items = sqlx::query_as::<_, InventoryItem>(&query)
            .bind(per_page)
            .bind(page_offset(page, per_page))
            .fetch_all(&mut *tx)
            .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM inventory_items")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((items, total))
    }

    /// Name and quantity of every item at or below `threshold`, ascending id.
    pub async fn list_low_stock(
        pool: &SqlitePool,
        threshold: i64,
    ) -> Result<Vec<StockLevel>, StoreError> {
        let rows = sqlx::query_as::<_, StockLevel>(
            "SELECT name, quantity FROM inventory_items
             WHERE quantity <= ?
             ORDER BY id ASC",
        )
        .bind(threshold)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Name and quantity of every item, ascending id.
    pub async fn report(pool: &SqlitePool) -> Result<Vec<StockLevel>, StoreError> {
        let rows = sqlx::query_as::<_, StockLevel>(
            "SELECT name, quantity FROM inventory_items ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Update an item. Only non-`None` fields in `input` are applied; the SKU
    /// is never changed.
    ///
    /// Returns `None` if no item with the given SKU exists.
    pub async fn update(
        pool: &SqlitePool,
        sku: &str,
        input: &UpdateInventoryItem,
    ) -> Result<Option<InventoryItem>, StoreError> {
        let query = format!(
            "UPDATE inventory_items SET
                name = COALESCE(?, name),
                description = COALESCE(?, description),
                quantity = COALESCE(?, quantity),
                price = COALESCE(?, price),
                category = COALESCE(?, category)
             WHERE sku = ?
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, InventoryItem>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(input.price)
            .bind(&input.category)
            .bind(sku)
            .fetch_optional(pool)
            .await?;
        Ok(item)
    }

    /// Delete an item by SKU. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, sku: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM inventory_items WHERE sku = ?")
            .bind(sku)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
