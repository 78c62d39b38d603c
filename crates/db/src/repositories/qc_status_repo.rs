//! Repository for the `run_library_qc_statuses` lookup table.

use runqc_core::types::DbId;
use sqlx::PgConnection;

use crate::models::qc_status::QcStatusRow;

const COLUMNS: &str = "id, description, qc_passed, created_at, updated_at";

pub struct QcStatusRepo;

impl QcStatusRepo {
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<QcStatusRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM run_library_qc_statuses WHERE id = $1");
        sqlx::query_as::<_, QcStatusRow>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all QC statuses ordered by ID.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<QcStatusRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM run_library_qc_statuses ORDER BY id");
        sqlx::query_as::<_, QcStatusRow>(&query).fetch_all(conn).await
    }
}
