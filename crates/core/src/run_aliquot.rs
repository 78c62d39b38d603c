//! The run-partition-aliquot record and its natural key.

use serde::Serialize;

use crate::audit_stamp::AuditStamp;
use crate::entities::{LibraryAliquot, Partition, QcStatus, Run, RunPurpose};
use crate::reference::Ref;
use crate::types::{DbId, Timestamp};

/// Composite natural key: one record per (run, partition, aliquot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RunAliquotKey {
    pub run_id: DbId,
    pub partition_id: DbId,
    pub aliquot_id: DbId,
}

/// QC and data-review state of one aliquot sequenced in one partition of a run.
///
/// The audit fields (`qc_user_id`, `qc_date`, `data_reviewer_id`,
/// `data_review_date`, `last_modifier_id`) are always computed by the save
/// workflow; values supplied by a caller are overwritten.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunPartitionAliquot {
    pub run: Ref<Run>,
    pub partition: Ref<Partition>,
    pub aliquot: Ref<LibraryAliquot>,
    pub purpose: Option<Ref<RunPurpose>>,
    pub qc_status: Option<Ref<QcStatus>>,
    pub qc_note: Option<String>,
    pub qc_user_id: Option<DbId>,
    pub qc_date: Option<Timestamp>,
    /// `None` = not yet reviewed, `Some(true)` = approved, `Some(false)` = rejected.
    pub data_review: Option<bool>,
    pub data_reviewer_id: Option<DbId>,
    pub data_review_date: Option<Timestamp>,
    pub last_modifier_id: Option<DbId>,
}

impl RunPartitionAliquot {
    /// A record with only its key set.
    pub fn new(run: Ref<Run>, partition: Ref<Partition>, aliquot: Ref<LibraryAliquot>) -> Self {
        Self {
            run,
            partition,
            aliquot,
            purpose: None,
            qc_status: None,
            qc_note: None,
            qc_user_id: None,
            qc_date: None,
            data_review: None,
            data_reviewer_id: None,
            data_review_date: None,
            last_modifier_id: None,
        }
    }

    pub fn key(&self) -> RunAliquotKey {
        RunAliquotKey {
            run_id: self.run.id(),
            partition_id: self.partition.id(),
            aliquot_id: self.aliquot.id(),
        }
    }

    pub fn qc_status_id(&self) -> Option<DbId> {
        self.qc_status.as_ref().map(Ref::id)
    }

    pub fn purpose_id(&self) -> Option<DbId> {
        self.purpose.as_ref().map(Ref::id)
    }

    pub fn qc_stamp(&self) -> AuditStamp {
        AuditStamp {
            user_id: self.qc_user_id,
            at: self.qc_date,
        }
    }

    pub fn set_qc_stamp(&mut self, stamp: AuditStamp) {
        self.qc_user_id = stamp.user_id;
        self.qc_date = stamp.at;
    }

    pub fn review_stamp(&self) -> AuditStamp {
        AuditStamp {
            user_id: self.data_reviewer_id,
            at: self.data_review_date,
        }
    }

    pub fn set_review_stamp(&mut self, stamp: AuditStamp) {
        self.data_reviewer_id = stamp.user_id;
        self.data_review_date = stamp.at;
    }

    /// Copy every mutable QC/review field from `candidate`, leaving the key intact.
    pub fn apply_qc_state(&mut self, candidate: RunPartitionAliquot) {
        self.purpose = candidate.purpose;
        self.qc_status = candidate.qc_status;
        self.qc_note = candidate.qc_note;
        self.qc_user_id = candidate.qc_user_id;
        self.qc_date = candidate.qc_date;
        self.data_review = candidate.data_review;
        self.data_reviewer_id = candidate.data_reviewer_id;
        self.data_review_date = candidate.data_review_date;
    }
}
