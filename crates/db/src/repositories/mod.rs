//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Lead queries always carry
//! the owning user id in the WHERE clause, so absence and foreign ownership
//! are indistinguishable to callers.

pub mod association_repo;
pub mod lead_repo;
pub mod product_repo;
pub mod service_repo;
pub mod user_repo;

pub use association_repo::AssociationRepo;
pub use lead_repo::LeadRepo;
pub use product_repo::ProductRepo;
pub use service_repo::ServiceRepo;
pub use user_repo::UserRepo;
