//! Repository for the `products` table.

use leadflow_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::catalog::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, is_active, created_at, updated_at";

/// Read-only access to the product catalog.
pub struct ProductRepo;

impl ProductRepo {
    /// List the active products offered for selection, sorted by name.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE is_active = true
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Snapshot of the active catalog's `(id, price)` pairs, taken at lead
    /// creation time to derive the potential amount.
    pub async fn active_prices(pool: &PgPool) -> Result<Vec<(DbId, Decimal)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, Decimal)>(
            "SELECT id, price FROM products WHERE is_active = true",
        )
        .fetch_all(pool)
        .await
    }
}
