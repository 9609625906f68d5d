//! Lead-to-catalog association models.

use serde::Serialize;

use crate::models::catalog::{Product, Service};
use crate::models::lead::Lead;

/// The catalog items attached to one lead.
#[derive(Debug, Clone, Serialize)]
pub struct LeadItems {
    pub products: Vec<Product>,
    pub services: Vec<Service>,
}

/// A lead enriched with its attached catalog items, as the edit form needs.
#[derive(Debug, Clone, Serialize)]
pub struct LeadWithItems {
    pub lead: Lead,
    pub products: Vec<Product>,
    pub services: Vec<Service>,
}
