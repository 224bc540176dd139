use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::InventoryService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Inventory operations, backed by the shared connection pool.
    pub inventory: InventoryService,
    /// Server configuration (page size and low-stock defaults for handlers).
    pub config: Arc<ServerConfig>,
}
