//! Repository for the `partitions` table.

use runqc_core::types::DbId;
use sqlx::PgConnection;

use crate::models::partition::PartitionRow;

const COLUMNS: &str = "id, container_id, partition_number, pool_id, created_at, updated_at";

pub struct PartitionRepo;

impl PartitionRepo {
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<PartitionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partitions WHERE id = $1");
        sqlx::query_as::<_, PartitionRow>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }
}
