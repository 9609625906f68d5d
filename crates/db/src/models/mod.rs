//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the write operations the API accepts, with
//!   `validator` rules for field-level constraints

pub mod association;
pub mod catalog;
pub mod lead;
pub mod user;

pub use association::{LeadItems, LeadWithItems};
pub use catalog::{Product, Service};
pub use lead::{
    CreateLead, Lead, LeadFilter, LeadStatus, LeadType, ModelType, NewLead, UpdateLead,
    UpdateLeadStatus,
};
pub use user::{NewUser, User};
