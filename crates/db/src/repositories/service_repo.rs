//! Repository for the `services` table.

use leadflow_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::catalog::Service;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, is_active, created_at, updated_at";

/// Read-only access to the service catalog.
pub struct ServiceRepo;

impl ServiceRepo {
    /// List the active services offered for selection, sorted by name.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services
             WHERE is_active = true
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Snapshot of the active catalog's `(id, price)` pairs, taken at lead
    /// creation time to derive the potential amount.
    pub async fn active_prices(pool: &PgPool) -> Result<Vec<(DbId, Decimal)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, Decimal)>(
            "SELECT id, price FROM services WHERE is_active = true",
        )
        .fetch_all(pool)
        .await
    }
}
