//! Repository for the `lead_products` and `lead_services` junction tables.
//!
//! Associations are written exactly once, inside the lead-creation
//! transaction, and never re-synced afterwards; a lead keeps the items it
//! was created with even if those items are later deactivated.

use leadflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::association::LeadItems;
use crate::models::catalog::{Product, Service};

/// Column lists for JOIN queries against the catalog tables.
const PRODUCT_COLUMNS: &str =
    "p.id, p.name, p.description, p.price, p.is_active, p.created_at, p.updated_at";
const SERVICE_COLUMNS: &str =
    "s.id, s.name, s.description, s.price, s.is_active, s.created_at, s.updated_at";

/// Access to a lead's attached catalog items.
pub struct AssociationRepo;

impl AssociationRepo {
    /// Insert junction rows for a new lead within its creation transaction.
    ///
    /// Ids are expected to be deduplicated already; the junction primary
    /// keys reject repeats.
    pub async fn attach(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        lead_id: DbId,
        product_ids: &[DbId],
        service_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        for &product_id in product_ids {
            sqlx::query("INSERT INTO lead_products (lead_id, product_id) VALUES ($1, $2)")
                .bind(lead_id)
                .bind(product_id)
                .execute(&mut **tx)
                .await?;
        }
        for &service_id in service_ids {
            sqlx::query("INSERT INTO lead_services (lead_id, service_id) VALUES ($1, $2)")
                .bind(lead_id)
                .bind(service_id)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }

    /// Products attached to a lead, in selection-stable id order.
    pub async fn products_for_lead(
        pool: &PgPool,
        lead_id: DbId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS}
             FROM products p
             JOIN lead_products lp ON lp.product_id = p.id
             WHERE lp.lead_id = $1
             ORDER BY p.id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(lead_id)
            .fetch_all(pool)
            .await
    }

    /// Services attached to a lead, in selection-stable id order.
    pub async fn services_for_lead(
        pool: &PgPool,
        lead_id: DbId,
    ) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {SERVICE_COLUMNS}
             FROM services s
             JOIN lead_services ls ON ls.service_id = s.id
             WHERE ls.lead_id = $1
             ORDER BY s.id"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(lead_id)
            .fetch_all(pool)
            .await
    }

    /// Both item lists for one lead.
    pub async fn items_for_lead(pool: &PgPool, lead_id: DbId) -> Result<LeadItems, sqlx::Error> {
        let products = Self::products_for_lead(pool, lead_id).await?;
        let services = Self::services_for_lead(pool, lead_id).await?;
        Ok(LeadItems { products, services })
    }
}
