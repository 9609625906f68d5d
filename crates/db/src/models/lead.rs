//! Lead model, classification enums and write DTOs.

use chrono::NaiveDate;
use leadflow_core::filter::any_contains_ci;
use leadflow_core::follow_up::apply_follow_up_gate;
use leadflow_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

// ---------------------------------------------------------------------------
// Classification enums
// ---------------------------------------------------------------------------
//
// Wire tokens and Postgres enum labels are identical, so the serde and sqlx
// renames must stay in lockstep (covered by tests below).

/// Lead lifecycle status. A flat set: any value may transition to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "lead_status")]
pub enum LeadStatus {
    New,
    #[serde(rename = "In-Progress")]
    #[sqlx(rename = "In-Progress")]
    InProgress,
    Closed,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In-Progress",
            Self::Closed => "Closed",
        }
    }
}

impl Default for LeadStatus {
    fn default() -> Self {
        Self::New
    }
}

/// What kind of party the lead represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "lead_type")]
pub enum LeadType {
    Individual,
    Business,
    #[serde(rename = "Housing-Society")]
    #[sqlx(rename = "Housing-Society")]
    HousingSociety,
    Agent,
}

impl LeadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Business => "Business",
            Self::HousingSociety => "Housing-Society",
            Self::Agent => "Agent",
        }
    }
}

impl Default for LeadType {
    fn default() -> Self {
        Self::Individual
    }
}

/// The commercial model the lead is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "model_type")]
pub enum ModelType {
    Purchase,
    Rent,
    #[serde(rename = "Individual Home-kit")]
    #[sqlx(rename = "Individual Home-kit")]
    IndividualHomeKit,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Purchase => "Purchase",
            Self::Rent => "Rent",
            Self::IndividualHomeKit => "Individual Home-kit",
        }
    }
}

impl Default for ModelType {
    fn default() -> Self {
        Self::Purchase
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `leads` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Lead {
    pub id: DbId,
    pub user_id: DbId,
    pub lead_type: LeadType,
    pub model_type: ModelType,
    pub lead_score: i16,
    pub status: LeadStatus,
    pub potential_amount: Decimal,
    pub follow_up: bool,
    pub follow_up_date: Option<NaiveDate>,
    pub follow_up_notes: Option<String>,
    pub lead_sealed: bool,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: String,
    pub location: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Write DTOs
// ---------------------------------------------------------------------------

fn validate_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("negative_amount"));
    }
    Ok(())
}

/// DTO for creating a new lead.
///
/// Classification, status and score default like the creation form does;
/// selected catalog items arrive as plain id lists. `lead_sealed` is not
/// accepted here: every new lead starts unsealed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLead {
    #[serde(default)]
    pub lead_type: LeadType,
    #[serde(default)]
    pub model_type: ModelType,
    #[serde(default)]
    #[validate(range(min = 0, max = 100, message = "lead_score must be between 0 and 100"))]
    pub lead_score: i16,
    #[serde(default)]
    pub status: LeadStatus,
    /// Manually entered amount; overridden when the selected items sum
    /// to a positive total.
    #[validate(custom(function = validate_amount, message = "potential_amount must not be negative"))]
    pub potential_amount: Option<Decimal>,
    #[serde(default)]
    pub follow_up: bool,
    pub follow_up_date: Option<NaiveDate>,
    pub follow_up_notes: Option<String>,
    #[validate(length(min = 1, message = "full_name is required"))]
    pub full_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    pub location: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub product_ids: Vec<DbId>,
    #[serde(default)]
    pub service_ids: Vec<DbId>,
}

/// DTO for editing a lead: a full replacement of every mutable field.
///
/// `user_id` and `created_at` are not mutable and have no field here; the
/// stored `potential_amount` is replaced verbatim, never recalculated.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLead {
    pub lead_type: LeadType,
    pub model_type: ModelType,
    #[validate(range(min = 0, max = 100, message = "lead_score must be between 0 and 100"))]
    pub lead_score: i16,
    pub status: LeadStatus,
    #[validate(custom(function = validate_amount, message = "potential_amount must not be negative"))]
    pub potential_amount: Decimal,
    pub follow_up: bool,
    pub follow_up_date: Option<NaiveDate>,
    pub follow_up_notes: Option<String>,
    pub lead_sealed: bool,
    #[validate(length(min = 1, message = "full_name is required"))]
    pub full_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    pub location: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
}

impl UpdateLead {
    /// Clear the follow-up fields when the gate is off, whatever the client
    /// sent.
    pub fn normalized(mut self) -> Self {
        let (date, notes) =
            apply_follow_up_gate(self.follow_up, self.follow_up_date, self.follow_up_notes);
        self.follow_up_date = date;
        self.follow_up_notes = notes;
        self
    }
}

/// DTO for the narrow status-only update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLeadStatus {
    pub status: LeadStatus,
}

/// Fully resolved insert payload for the `leads` table.
///
/// Built by the API layer after amount derivation and follow-up gating; the
/// id lists have already been deduplicated and filtered to active catalog
/// items.
#[derive(Debug, Clone)]
pub struct NewLead {
    pub user_id: DbId,
    pub lead_type: LeadType,
    pub model_type: ModelType,
    pub lead_score: i16,
    pub status: LeadStatus,
    pub potential_amount: Decimal,
    pub follow_up: bool,
    pub follow_up_date: Option<NaiveDate>,
    pub follow_up_notes: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: String,
    pub location: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
    pub product_ids: Vec<DbId>,
    pub service_ids: Vec<DbId>,
}

// ---------------------------------------------------------------------------
// List filtering
// ---------------------------------------------------------------------------

/// Query parameters for lead listing.
///
/// Conjunctive: a lead must satisfy every present filter. Applied in-process
/// to the caller's already-fetched lead set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadFilter {
    /// Case-insensitive substring over full_name, email and company.
    pub q: Option<String>,
    pub status: Option<LeadStatus>,
    pub lead_type: Option<LeadType>,
    pub model_type: Option<ModelType>,
}

impl LeadFilter {
    pub fn matches(&self, lead: &Lead) -> bool {
        if let Some(needle) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let fields = [
                Some(lead.full_name.as_str()),
                Some(lead.email.as_str()),
                lead.company.as_deref(),
            ];
            if !any_contains_ci(fields, needle) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if lead.status != status {
                return false;
            }
        }
        if let Some(lead_type) = self.lead_type {
            if lead.lead_type != lead_type {
                return false;
            }
        }
        if let Some(model_type) = self.model_type {
            if lead.model_type != model_type {
                return false;
            }
        }
        true
    }
}
