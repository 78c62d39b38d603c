//! Who-and-when stamping for tracked fields.

use crate::actor::Actor;
use crate::diff::FieldChange;
use crate::types::{DbId, Timestamp};

/// A (user, timestamp) pair recording the last change of a tracked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuditStamp {
    pub user_id: Option<DbId>,
    pub at: Option<Timestamp>,
}

/// Compute the audit pair for a tracked field.
///
/// A newly set value is stamped with `actor` and `now`, a cleared value clears
/// the pair, and an unchanged value keeps the baseline pair as-is.
pub fn stamp(change: FieldChange, baseline: AuditStamp, actor: &Actor, now: Timestamp) -> AuditStamp {
    match change {
        FieldChange::Unchanged => baseline,
        FieldChange::Set => AuditStamp {
            user_id: Some(actor.id),
            at: Some(now),
        },
        FieldChange::Cleared => AuditStamp::default(),
    }
}
