//! Repository for the `runs` table.

use runqc_core::types::DbId;
use sqlx::PgConnection;

use crate::models::run::RunRow;

const COLUMNS: &str = "id, name, alias, created_at, updated_at";

pub struct RunRepo;

impl RunRepo {
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<RunRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM runs WHERE id = $1");
        sqlx::query_as::<_, RunRow>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }
}
