//! Run-library QC status lookup rows.

use runqc_core::entities::QcStatus;
use runqc_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `run_library_qc_statuses` lookup table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QcStatusRow {
    pub id: DbId,
    pub description: String,
    pub qc_passed: Option<bool>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<QcStatusRow> for QcStatus {
    fn from(row: QcStatusRow) -> Self {
        QcStatus {
            id: row.id,
            description: row.description,
            qc_passed: row.qc_passed,
        }
    }
}
