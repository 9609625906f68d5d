//! Repository for the `leads` table.
//!
//! Every query on an individual lead carries both the lead id and the
//! owning user id, so a lead that exists but belongs to someone else is
//! reported exactly like one that does not exist.

use leadflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::association::LeadWithItems;
use crate::models::lead::{Lead, LeadStatus, NewLead, UpdateLead};
use crate::repositories::association_repo::AssociationRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, lead_type, model_type, lead_score, status, \
    potential_amount, follow_up, follow_up_date, follow_up_notes, lead_sealed, \
    full_name, email, phone, company, address, location, postal_code, notes, \
    created_at, updated_at";

/// Owner-scoped CRUD for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead together with its catalog-item associations.
    ///
    /// Lead row and junction rows are written in one transaction; a failed
    /// association insert rolls the lead back too. Status and sealing start
    /// from the payload's resolved values (`lead_sealed` always starts
    /// false via the schema default).
    pub async fn create(pool: &PgPool, input: &NewLead) -> Result<Lead, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO leads
                (user_id, lead_type, model_type, lead_score, status,
                 potential_amount, follow_up, follow_up_date, follow_up_notes,
                 full_name, email, phone, company, address, location,
                 postal_code, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                 $14, $15, $16, $17)
             RETURNING {COLUMNS}"
        );
        let lead = sqlx::query_as::<_, Lead>(&insert_query)
            .bind(input.user_id)
            .bind(input.lead_type)
            .bind(input.model_type)
            .bind(input.lead_score)
            .bind(input.status)
            .bind(input.potential_amount)
            .bind(input.follow_up)
            .bind(input.follow_up_date)
            .bind(&input.follow_up_notes)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.address)
            .bind(&input.location)
            .bind(&input.postal_code)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        if !input.product_ids.is_empty() || !input.service_ids.is_empty() {
            AssociationRepo::attach(&mut tx, lead.id, &input.product_ids, &input.service_ids)
                .await?;
        }

        tx.commit().await?;
        Ok(lead)
    }

    /// Find a lead by id, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a lead by id with its attached catalog items, scoped to its
    /// owner.
    pub async fn find_by_id_with_items(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<LeadWithItems>, sqlx::Error> {
        let lead = Self::find_by_id(pool, id, user_id).await?;
        match lead {
            Some(lead) => {
                let items = AssociationRepo::items_for_lead(pool, lead.id).await?;
                Ok(Some(LeadWithItems {
                    lead,
                    products: items.products,
                    services: items.services,
                }))
            }
            None => Ok(None),
        }
    }

    /// List all of one user's leads, best score first.
    ///
    /// The id tiebreak keeps the order stable between calls; any further
    /// filtering happens in-process on this set.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM leads
             WHERE user_id = $1
             ORDER BY lead_score DESC, id ASC"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable field of a lead, scoped to its owner.
    ///
    /// The caller is expected to have normalized the follow-up fields
    /// already. `user_id` and `created_at` never change; `updated_at` is
    /// refreshed. Returns `None` when the lead is absent or foreign-owned.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateLead,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET
                lead_type = $3,
                model_type = $4,
                lead_score = $5,
                status = $6,
                potential_amount = $7,
                follow_up = $8,
                follow_up_date = $9,
                follow_up_notes = $10,
                lead_sealed = $11,
                full_name = $12,
                email = $13,
                phone = $14,
                company = $15,
                address = $16,
                location = $17,
                postal_code = $18,
                notes = $19,
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.lead_type)
            .bind(input.model_type)
            .bind(input.lead_score)
            .bind(input.status)
            .bind(input.potential_amount)
            .bind(input.follow_up)
            .bind(input.follow_up_date)
            .bind(&input.follow_up_notes)
            .bind(input.lead_sealed)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.address)
            .bind(&input.location)
            .bind(&input.postal_code)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Narrow update touching only `status` and `updated_at`, scoped to the
    /// owner.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        status: LeadStatus,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET status = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(user_id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lead, scoped to its owner. Junction rows cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
