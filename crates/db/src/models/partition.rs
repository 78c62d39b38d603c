//! Container partition (lane) rows.

use runqc_core::entities::Partition;
use runqc_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `partitions` table.
#[derive(Debug, Clone, FromRow)]
pub struct PartitionRow {
    pub id: DbId,
    pub container_id: DbId,
    pub partition_number: i32,
    pub pool_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<PartitionRow> for Partition {
    fn from(row: PartitionRow) -> Self {
        Partition {
            id: row.id,
            container_id: row.container_id,
            partition_number: row.partition_number,
            pool_id: row.pool_id,
        }
    }
}
