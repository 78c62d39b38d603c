//! User rows and the acting-user projection.

use runqc_core::actor::Actor;
use runqc_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub is_admin: bool,
    pub is_run_reviewer: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub is_admin: bool,
    pub is_run_reviewer: bool,
}

impl From<User> for Actor {
    fn from(user: User) -> Self {
        Actor {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin,
            is_run_reviewer: user.is_run_reviewer,
        }
    }
}
