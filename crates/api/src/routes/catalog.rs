//! Route definitions for the read-only catalog.
//!
//! Merged at the `/api/v1` root by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes.
///
/// ```text
/// GET /products  -> list_products (active only)
/// GET /services  -> list_services (active only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(catalog::list_products))
        .route("/services", get(catalog::list_services))
}
