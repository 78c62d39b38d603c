//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the user id from a JWT Bearer token.
//! - [`auth::CurrentUser`] -- the acting [`Actor`](runqc_core::actor::Actor),
//!   loaded from the `users` table.
//! - [`rbac::RequireAdmin`] -- an admin actor.

pub mod auth;
pub mod rbac;
