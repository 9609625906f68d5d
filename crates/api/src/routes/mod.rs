pub mod auth;
pub mod catalog;
pub mod health;
pub mod leads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register            register (public)
/// /auth/login               login (public)
/// /auth/me                  current account (requires auth)
///
/// /products                 list active products
/// /services                 list active services
///
/// /leads                    list, create
/// /leads/{id}               get, update, delete
/// /leads/{id}/status        narrow status update (PATCH)
/// /leads/{id}/items         attached catalog items (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(catalog::router())
        .nest("/leads", leads::router())
}
