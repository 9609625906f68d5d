//! Repository for the `users` table.

use leadflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{NewUser, User};

const COLUMNS: &str = "id, email, password_hash, full_name, created_at, updated_at";

/// Account lookups and registration. Passwords arrive here already hashed;
/// plaintext never crosses the crate boundary.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new account and return the stored row. A duplicate email
    /// trips the `uq_users_email` constraint, which the API layer turns
    /// into a conflict response.
    pub async fn create(pool: &PgPool, input: &NewUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, full_name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.full_name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Email lookup for login. Matches exactly; emails are stored as given
    /// at registration.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
