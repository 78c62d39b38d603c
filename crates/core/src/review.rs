//! Data-review authorization gate.

use crate::actor::Actor;

/// Whether `actor` may set, change, or clear the data-review decision.
pub fn may_change_data_review(actor: &Actor) -> bool {
    actor.is_run_reviewer || actor.is_admin
}
