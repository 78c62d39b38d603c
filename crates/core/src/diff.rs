//! Before/after comparison of the tracked fields of a record.
//!
//! A missing baseline is treated as a baseline whose tracked fields are all
//! absent, so the first save of a record diffs against "nothing set".

use crate::run_aliquot::RunPartitionAliquot;

/// How one tracked field differs between a candidate and its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldChange {
    Unchanged,
    /// The field now holds a value different from the baseline.
    Set,
    /// The field held a value and is now absent.
    Cleared,
}

impl FieldChange {
    pub fn between<T: PartialEq>(candidate: Option<T>, baseline: Option<T>) -> Self {
        if candidate == baseline {
            FieldChange::Unchanged
        } else if candidate.is_some() {
            FieldChange::Set
        } else {
            FieldChange::Cleared
        }
    }

    pub fn is_changed(self) -> bool {
        self != FieldChange::Unchanged
    }
}

/// QC statuses are compared by identity.
pub fn qc_status_change(
    candidate: &RunPartitionAliquot,
    baseline: Option<&RunPartitionAliquot>,
) -> FieldChange {
    FieldChange::between(
        candidate.qc_status_id(),
        baseline.and_then(RunPartitionAliquot::qc_status_id),
    )
}

pub fn data_review_change(
    candidate: &RunPartitionAliquot,
    baseline: Option<&RunPartitionAliquot>,
) -> FieldChange {
    FieldChange::between(candidate.data_review, baseline.and_then(|b| b.data_review))
}
