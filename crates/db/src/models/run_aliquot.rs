//! Run-partition-aliquot rows.

use runqc_core::entities::{LibraryAliquot, Partition, QcStatus, Run, RunPurpose};
use runqc_core::reference::Ref;
use runqc_core::run_aliquot::RunPartitionAliquot;
use runqc_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A `run_partition_aliquots` row joined with its run, partition, aliquot,
/// purpose and QC status so the record comes back fully resolved.
#[derive(Debug, Clone, FromRow)]
pub struct RunAliquotRow {
    pub run_id: DbId,
    pub run_name: String,
    pub run_alias: Option<String>,
    pub partition_id: DbId,
    pub container_id: DbId,
    pub partition_number: i32,
    pub pool_id: Option<DbId>,
    pub aliquot_id: DbId,
    pub aliquot_name: String,
    pub library_id: DbId,
    pub purpose_id: Option<DbId>,
    pub purpose_alias: Option<String>,
    pub qc_status_id: Option<DbId>,
    pub qc_status_description: Option<String>,
    pub qc_passed: Option<bool>,
    pub qc_note: Option<String>,
    pub qc_user_id: Option<DbId>,
    pub qc_date: Option<Timestamp>,
    pub data_review: Option<bool>,
    pub data_reviewer_id: Option<DbId>,
    pub data_review_date: Option<Timestamp>,
    pub last_modifier_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<RunAliquotRow> for RunPartitionAliquot {
    fn from(row: RunAliquotRow) -> Self {
        let purpose = row
            .purpose_id
            .zip(row.purpose_alias)
            .map(|(id, alias)| Ref::Resolved(RunPurpose { id, alias }));
        let qc_status = row
            .qc_status_id
            .zip(row.qc_status_description)
            .map(|(id, description)| {
                Ref::Resolved(QcStatus {
                    id,
                    description,
                    qc_passed: row.qc_passed,
                })
            });

        RunPartitionAliquot {
            run: Ref::Resolved(Run {
                id: row.run_id,
                name: row.run_name,
                alias: row.run_alias,
            }),
            partition: Ref::Resolved(Partition {
                id: row.partition_id,
                container_id: row.container_id,
                partition_number: row.partition_number,
                pool_id: row.pool_id,
            }),
            aliquot: Ref::Resolved(LibraryAliquot {
                id: row.aliquot_id,
                name: row.aliquot_name,
                library_id: row.library_id,
            }),
            purpose,
            qc_status,
            qc_note: row.qc_note,
            qc_user_id: row.qc_user_id,
            qc_date: row.qc_date,
            data_review: row.data_review,
            data_reviewer_id: row.data_reviewer_id,
            data_review_date: row.data_review_date,
            last_modifier_id: Some(row.last_modifier_id),
        }
    }
}
