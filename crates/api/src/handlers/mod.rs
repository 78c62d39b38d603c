pub mod lookups;
pub mod run_aliquots;
