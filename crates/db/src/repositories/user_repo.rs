//! Repository for the `users` table.

use runqc_core::types::DbId;
use sqlx::PgConnection;

use crate::models::user::{CreateUser, User};

const COLUMNS: &str = "id, username, is_admin, is_run_reviewer, is_active, created_at, updated_at";

pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, is_admin, is_run_reviewer)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(input.is_admin)
            .bind(input.is_run_reviewer)
            .fetch_one(conn)
            .await
    }

    /// Find an active user by ID. Deactivated users are treated as absent.
    pub async fn find_active_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 AND is_active = true");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }
}
