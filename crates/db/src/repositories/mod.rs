//! Zero-sized repositories, one per table.
//!
//! Every method takes `&mut PgConnection` so the same query runs either on a
//! pooled connection or inside an open transaction.

pub mod library_aliquot_repo;
pub mod partition_repo;
pub mod qc_status_repo;
pub mod run_aliquot_repo;
pub mod run_purpose_repo;
pub mod run_repo;
pub mod user_repo;

pub use library_aliquot_repo::LibraryAliquotRepo;
pub use partition_repo::PartitionRepo;
pub use qc_status_repo::QcStatusRepo;
pub use run_aliquot_repo::RunAliquotRepo;
pub use run_purpose_repo::RunPurposeRepo;
pub use run_repo::RunRepo;
pub use user_repo::UserRepo;
