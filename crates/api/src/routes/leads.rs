//! Route definitions for the leads resource.
//!
//! Mounted at `/leads` by `api_routes()`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Lead routes (all require auth; all owner-scoped).
///
/// ```text
/// GET    /              -> list_leads (?q, status, lead_type, model_type)
/// POST   /              -> create_lead
/// GET    /{id}          -> get_lead (with attached items)
/// PUT    /{id}          -> update_lead
/// DELETE /{id}          -> delete_lead
/// PATCH  /{id}/status   -> update_lead_status
/// GET    /{id}/items    -> list_lead_items
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(leads::list_leads).post(leads::create_lead))
        .route(
            "/{id}",
            get(leads::get_lead)
                .put(leads::update_lead)
                .delete(leads::delete_lead),
        )
        .route("/{id}/status", patch(leads::update_lead_status))
        .route("/{id}/items", get(leads::list_lead_items))
}
