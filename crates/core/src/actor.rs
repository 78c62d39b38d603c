//! The user on whose behalf an operation runs.

use serde::Serialize;

use crate::types::DbId;

/// The acting user, passed explicitly into every workflow step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub username: String,
    pub is_admin: bool,
    pub is_run_reviewer: bool,
}
