//! Repository for the `run_purposes` lookup table.

use runqc_core::types::DbId;
use sqlx::PgConnection;

use crate::models::run_purpose::RunPurposeRow;

const COLUMNS: &str = "id, alias, created_at, updated_at";

pub struct RunPurposeRepo;

impl RunPurposeRepo {
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<RunPurposeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM run_purposes WHERE id = $1");
        sqlx::query_as::<_, RunPurposeRow>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all purposes ordered by ID.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<RunPurposeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM run_purposes ORDER BY id");
        sqlx::query_as::<_, RunPurposeRow>(&query).fetch_all(conn).await
    }
}
