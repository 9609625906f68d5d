//! Handlers for the `/leads` resource.
//!
//! Every operation runs against the authenticated user's own leads; absence
//! and foreign ownership produce the same 404.

use std::collections::BTreeSet;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use leadflow_core::error::CoreError;
use leadflow_core::follow_up::apply_follow_up_gate;
use leadflow_core::pricing::{self, CatalogPrices};
use leadflow_core::types::DbId;
use leadflow_db::models::lead::{CreateLead, LeadFilter, NewLead, UpdateLead, UpdateLeadStatus};
use leadflow_db::repositories::{AssociationRepo, LeadRepo, ProductRepo, ServiceRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Drop repeated ids so the junction primary keys never see a duplicate.
fn dedupe(ids: &[DbId]) -> Vec<DbId> {
    ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

/// POST /leads
///
/// Create a lead. When catalog items are selected, their summed prices
/// become the potential amount (a zero sum leaves the manually entered
/// amount in force), and the association rows are written in the same
/// transaction as the lead itself.
pub async fn create_lead(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateLead>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::Validation)?;

    // Snapshot of the active catalog; ids that do not resolve here are
    // dropped from the associations and contribute nothing to the total.
    let product_prices = ProductRepo::active_prices(&state.pool).await?;
    let service_prices = ServiceRepo::active_prices(&state.pool).await?;
    let catalog = CatalogPrices::from_rows(product_prices, service_prices);

    let product_ids = catalog.known_products(&dedupe(&input.product_ids));
    let service_ids = catalog.known_services(&dedupe(&input.service_ids));

    let computed = pricing::potential_amount(&product_ids, &service_ids, &catalog);
    let potential_amount = pricing::resolve_potential_amount(input.potential_amount, computed);

    let (follow_up_date, follow_up_notes) = apply_follow_up_gate(
        input.follow_up,
        input.follow_up_date,
        input.follow_up_notes,
    );

    let new_lead = NewLead {
        user_id: auth.user_id,
        lead_type: input.lead_type,
        model_type: input.model_type,
        lead_score: input.lead_score,
        status: input.status,
        potential_amount,
        follow_up: input.follow_up,
        follow_up_date,
        follow_up_notes,
        full_name: input.full_name,
        email: input.email,
        phone: input.phone,
        company: input.company,
        address: input.address,
        location: input.location,
        postal_code: input.postal_code,
        notes: input.notes,
        product_ids,
        service_ids,
    };

    let lead = LeadRepo::create(&state.pool, &new_lead).await?;

    tracing::info!(
        user_id = auth.user_id,
        lead_id = lead.id,
        potential_amount = %lead.potential_amount,
        status = lead.status.as_str(),
        "Lead created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: lead })))
}

/// GET /leads?q=&status=&lead_type=&model_type=
///
/// List the caller's leads, best score first, refined by the conjunctive
/// filters in-process.
pub async fn list_leads(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<LeadFilter>,
) -> AppResult<impl IntoResponse> {
    let mut leads = LeadRepo::list_for_user(&state.pool, auth.user_id).await?;
    leads.retain(|lead| filter.matches(lead));

    Ok(Json(DataResponse { data: leads }))
}

/// GET /leads/{id}
///
/// Get one lead with its attached catalog items.
pub async fn get_lead(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let lead = LeadRepo::find_by_id_with_items(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;

    Ok(Json(DataResponse { data: lead }))
}

/// GET /leads/{id}/items
///
/// Just the attached catalog items of one lead.
pub async fn list_lead_items(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // Ownership check first; the junction tables do not carry user_id.
    LeadRepo::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;

    let items = AssociationRepo::items_for_lead(&state.pool, id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// PUT /leads/{id}
///
/// Replace every mutable field of a lead. The stored amount is taken
/// verbatim (no recalculation), and the follow-up fields are cleared when
/// the gate is off.
pub async fn update_lead(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLead>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::Validation)?;
    let input = input.normalized();

    let lead = LeadRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;

    tracing::info!(user_id = auth.user_id, lead_id = lead.id, "Lead updated");

    Ok(Json(DataResponse { data: lead }))
}

/// PATCH /leads/{id}/status
///
/// Narrow update of the status field only.
pub async fn update_lead_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLeadStatus>,
) -> AppResult<impl IntoResponse> {
    let lead = LeadRepo::update_status(&state.pool, id, auth.user_id, input.status)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;

    tracing::info!(
        user_id = auth.user_id,
        lead_id = lead.id,
        status = lead.status.as_str(),
        "Lead status updated"
    );

    Ok(Json(DataResponse { data: lead }))
}

/// DELETE /leads/{id}
///
/// Delete a lead; its associations cascade away with it.
pub async fn delete_lead(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = LeadRepo::delete(&state.pool, id, auth.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Lead", id }));
    }

    tracing::info!(user_id = auth.user_id, lead_id = id, "Lead deleted");

    Ok(StatusCode::NO_CONTENT)
}
