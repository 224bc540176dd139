pub mod health;
pub mod inventory;
pub mod reports;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                  list (?page=&per_page=), create
/// /items/{sku}            get, update (PUT/PATCH), delete
///
/// /reports/inventory      full item records
/// /reports/stock          name + quantity of every item
/// /reports/low-stock      name + quantity at or below ?threshold=
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", inventory::router())
        .nest("/reports", reports::router())
}
