//! Pure domain logic for the Leadflow backend.
//!
//! This crate holds the rules that make a lead a lead -- how its monetary
//! potential is derived from catalog selections, how the follow-up gate
//! couples its sub-fields, and how client-side list filtering matches text.
//! Nothing here performs I/O; persistence lives in `leadflow-db` and the
//! HTTP surface in `leadflow-api`.

pub mod error;
pub mod filter;
pub mod follow_up;
pub mod pricing;
pub mod types;
