//! Handlers for the `/reports` resource.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use stockroom_db::models::inventory_item::{InventoryItem, StockLevel};

use crate::error::AppResult;
use crate::query::LowStockParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/reports/inventory
///
/// Full item records, insertion order.
pub async fn inventory(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<InventoryItem>>>> {
    let items = state.inventory.all_items().await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/reports/stock
pub async fn stock(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<StockLevel>>>> {
    let rows = state.inventory.full_report().await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/reports/low-stock?threshold=
///
/// Defaults to the configured threshold when none is given.
pub async fn low_stock(
    State(state): State<AppState>,
    params: Result<Query<LowStockParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<Vec<StockLevel>>>> {
    let Query(params) = params?;
    let threshold = params.threshold.unwrap_or(state.config.low_stock_threshold);

    let rows = state.inventory.low_stock_report(threshold).await?;
    Ok(Json(DataResponse { data: rows }))
}
