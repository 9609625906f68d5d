//! Handlers for the catalog resources (`/products`, `/services`).
//!
//! The catalog is read-only over HTTP: the creation form asks for the active
//! items, and that is the whole surface. A storage failure surfaces as the
//! standard 500 envelope; the caller logs it and shows an empty list.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use leadflow_db::repositories::{ProductRepo, ServiceRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /products
///
/// List active products, sorted by name.
pub async fn list_products(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: products }))
}

/// GET /services
///
/// List active services, sorted by name.
pub async fn list_services(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let services = ServiceRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: services }))
}
