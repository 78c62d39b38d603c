//! Run purpose lookup rows.

use runqc_core::entities::RunPurpose;
use runqc_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `run_purposes` lookup table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RunPurposeRow {
    pub id: DbId,
    pub alias: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<RunPurposeRow> for RunPurpose {
    fn from(row: RunPurposeRow) -> Self {
        RunPurpose {
            id: row.id,
            alias: row.alias,
        }
    }
}
