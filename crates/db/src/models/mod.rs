//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` struct matching the database row and a
//! conversion into the matching `runqc_core` type.

pub mod library_aliquot;
pub mod partition;
pub mod qc_status;
pub mod run;
pub mod run_aliquot;
pub mod run_purpose;
pub mod user;
