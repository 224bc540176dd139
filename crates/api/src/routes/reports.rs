//! Route definitions for the `/reports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET /inventory    -> inventory
/// GET /stock        -> stock
/// GET /low-stock    -> low_stock (?threshold=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/inventory", get(reports::inventory))
        .route("/stock", get(reports::stock))
        .route("/low-stock", get(reports::low_stock))
}
