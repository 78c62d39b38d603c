//! Repository for the `library_aliquots` table.

use runqc_core::types::DbId;
use sqlx::PgConnection;

use crate::models::library_aliquot::LibraryAliquotRow;

const COLUMNS: &str = "id, name, library_id, created_at, updated_at";

pub struct LibraryAliquotRepo;

impl LibraryAliquotRepo {
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<LibraryAliquotRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM library_aliquots WHERE id = $1");
        sqlx::query_as::<_, LibraryAliquotRow>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }
}
