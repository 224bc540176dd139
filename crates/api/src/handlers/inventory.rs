//! Handlers for the `/items` resource.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use stockroom_core::error::CoreError;
use stockroom_core::inventory::ENTITY_INVENTORY_ITEM;
use stockroom_db::models::inventory_item::{
    CreateInventoryItem, InventoryItem, InventoryPage, UpdateInventoryItem,
};

use crate::error::AppResult;
use crate::query::PageParams;
use crate::response::{DataResponse, DeleteResult};
use crate::state::AppState;

/// GET /api/v1/items?page=&per_page=
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<InventoryPage>>> {
    let Query(params) = params?;
    let page = params.page.unwrap_or(1);
    let per_page = params.per_page.unwrap_or(state.config.page_size);

    let data = state.inventory.page(page, per_page).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/items
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateInventoryItem>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<InventoryItem>>)> {
    let Json(input) = payload?;
    let item = state.inventory.add_item(&input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /api/v1/items/{sku}
pub async fn get_by_sku(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> AppResult<Json<DataResponse<InventoryItem>>> {
    let item = state
        .inventory
        .find_item(&sku)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY_INVENTORY_ITEM, sku))?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT|PATCH /api/v1/items/{sku}
///
/// Partial update: omitted fields keep their current value. A body that
/// names `sku`, `id` or any other unknown field is rejected.
pub async fn update(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    payload: Result<Json<UpdateInventoryItem>, JsonRejection>,
) -> AppResult<Json<DataResponse<InventoryItem>>> {
    let Json(input) = payload?;
    let item = state.inventory.edit_item(&sku, &input).await?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/items/{sku}
pub async fn delete(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> AppResult<Json<DataResponse<DeleteResult>>> {
    let deleted = state.inventory.remove_item(&sku).await?;
    Ok(Json(DataResponse {
        data: DeleteResult { deleted },
    }))
}
