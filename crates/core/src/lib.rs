//! Domain logic for run-partition-aliquot QC and data review.
//!
//! Pure types and workflow with no database dependency; persistence and
//! lookups are reached through the traits in [`session`] and [`reference`].

pub mod actor;
pub mod audit_stamp;
pub mod diff;
pub mod entities;
pub mod error;
pub mod qc_validation;
pub mod reference;
pub mod review;
pub mod run_aliquot;
pub mod service;
pub mod session;
pub mod types;
pub mod workflow;

#[cfg(test)]
mod testing;
