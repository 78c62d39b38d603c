//! Sequencing run rows.

use runqc_core::entities::Run;
use runqc_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `runs` table.
#[derive(Debug, Clone, FromRow)]
pub struct RunRow {
    pub id: DbId,
    pub name: String,
    pub alias: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<RunRow> for Run {
    fn from(row: RunRow) -> Self {
        Run {
            id: row.id,
            name: row.name,
            alias: row.alias,
        }
    }
}
