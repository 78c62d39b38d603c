//! Business rules checked before a run-partition-aliquot save is committed.
//!
//! Every rule is evaluated; the caller receives the full list of violations
//! so a form can show them all at once.

use crate::actor::Actor;
use crate::diff::data_review_change;
use crate::error::FieldError;
use crate::review::may_change_data_review;
use crate::run_aliquot::RunPartitionAliquot;

pub const FIELD_DATA_REVIEW: &str = "data_review";
pub const FIELD_QC_USER: &str = "qc_user";

pub const MSG_REVIEW_BEFORE_QC: &str = "Cannot set data review before QC status.";
pub const MSG_QC_USER_MISSING: &str = "QC user must be set when QC status is set.";
pub const MSG_NOT_AUTHORIZED: &str = "You are not authorized to make this change.";

/// Evaluate every rule for `candidate` against its stored `baseline`.
pub fn validate(
    candidate: &RunPartitionAliquot,
    baseline: Option<&RunPartitionAliquot>,
    actor: &Actor,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if candidate.data_review.is_some() && candidate.qc_status.is_none() {
        errors.push(FieldError::new(FIELD_DATA_REVIEW, MSG_REVIEW_BEFORE_QC));
    }

    // Normally guaranteed by the audit stamper; checked here independently.
    if candidate.qc_status.is_some() && candidate.qc_user_id.is_none() {
        errors.push(FieldError::new(FIELD_QC_USER, MSG_QC_USER_MISSING));
    }

    if data_review_change(candidate, baseline).is_changed() && !may_change_data_review(actor) {
        errors.push(FieldError::new(FIELD_DATA_REVIEW, MSG_NOT_AUTHORIZED));
    }

    errors
}
