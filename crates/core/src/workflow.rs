//! The QC / data-review save workflow.
//!
//! Order matters here:
//!
//! 1. load the baseline by natural key
//! 2. resolve purpose and QC status references
//! 3. stamp the QC audit pair
//! 4. a QC status change discards any data review (a review only holds for
//!    the QC status it was made against), *before* the review is stamped, so
//!    a simultaneous QC change and review submission never keeps the review
//! 5. stamp the data-review audit pair
//! 6. validate, aborting with every violation
//! 7. create (re-resolving the key entities) or update the baseline in place

use crate::actor::Actor;
use crate::audit_stamp::stamp;
use crate::diff::{data_review_change, qc_status_change};
use crate::error::CoreError;
use crate::qc_validation::validate;
use crate::reference::{reload, resolve};
use crate::run_aliquot::RunPartitionAliquot;
use crate::session::Session;
use crate::types::Timestamp;

/// Save one candidate record through `session`.
///
/// The caller owns the transaction: on error nothing written through
/// `session` may be committed.
pub async fn save<S: Session>(
    session: &mut S,
    actor: &Actor,
    now: Timestamp,
    mut candidate: RunPartitionAliquot,
) -> Result<(), CoreError> {
    let key = candidate.key();
    let baseline = session.get(key).await?;

    candidate.purpose = resolve(candidate.purpose.take(), &mut *session).await?;
    candidate.qc_status = resolve(candidate.qc_status.take(), &mut *session).await?;

    let qc_change = qc_status_change(&candidate, baseline.as_ref());
    let qc_baseline = baseline
        .as_ref()
        .map(RunPartitionAliquot::qc_stamp)
        .unwrap_or_default();
    candidate.set_qc_stamp(stamp(qc_change, qc_baseline, actor, now));

    if qc_change.is_changed() && candidate.data_review.take().is_some() {
        tracing::debug!(?key, "QC status changed, discarding submitted data review");
    }

    let review_change = data_review_change(&candidate, baseline.as_ref());
    let review_baseline = baseline
        .as_ref()
        .map(RunPartitionAliquot::review_stamp)
        .unwrap_or_default();
    candidate.set_review_stamp(stamp(review_change, review_baseline, actor, now));

    let errors = validate(&candidate, baseline.as_ref(), actor);
    if !errors.is_empty() {
        tracing::info!(
            ?key,
            user_id = actor.id,
            error_count = errors.len(),
            "Run-aliquot save rejected"
        );
        return Err(CoreError::ValidationFailed(errors));
    }

    match baseline {
        None => {
            candidate.run = reload(&candidate.run, &mut *session).await?;
            candidate.partition = reload(&candidate.partition, &mut *session).await?;
            candidate.aliquot = reload(&candidate.aliquot, &mut *session).await?;
            candidate.last_modifier_id = Some(actor.id);
            session.create(&candidate).await?;
            tracing::info!(?key, user_id = actor.id, "Run-aliquot created");
        }
        Some(mut managed) => {
            managed.apply_qc_state(candidate);
            managed.last_modifier_id = Some(actor.id);
            session.update(&managed).await?;
            tracing::info!(
                ?key,
                user_id = actor.id,
                qc_changed = qc_change.is_changed(),
                review_changed = review_change.is_changed(),
                "Run-aliquot updated"
            );
        }
    }

    Ok(())
}
