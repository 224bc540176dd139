//! Route definitions for the `/items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::inventory;
use crate::state::AppState;

/// Routes mounted at `/items`.
///
/// ```text
/// GET    /          -> list (?page=&per_page=)
/// POST   /          -> create
/// GET    /{sku}     -> get_by_sku
/// PUT    /{sku}     -> update
/// PATCH  /{sku}     -> update
/// DELETE /{sku}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inventory::list).post(inventory::create))
        .route(
            "/{sku}",
            get(inventory::get_by_sku)
                .put(inventory::update)
                .patch(inventory::update)
                .delete(inventory::delete),
        )
}
