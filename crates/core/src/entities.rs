//! Canonical entities referenced by a run-partition-aliquot record.
//!
//! These are owned by other parts of the LIMS; this crate only reads them
//! through [`Lookup`](crate::reference::Lookup) implementations.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Anything with a stable database identity.
pub trait Identified {
    /// Human-readable entity name used in `NotFound` errors.
    const ENTITY: &'static str;

    fn id(&self) -> DbId;
}

/// A sequencing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: DbId,
    pub name: String,
    pub alias: Option<String>,
}

/// A physical subdivision of a run container, e.g. a flow-cell lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub id: DbId,
    pub container_id: DbId,
    pub partition_number: i32,
    /// The pool loaded into this partition, if any.
    pub pool_id: Option<DbId>,
}

/// A portion of a prepared library loaded for sequencing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryAliquot {
    pub id: DbId,
    pub name: String,
    pub library_id: DbId,
}

/// Why an aliquot was sequenced on a run (production, QC, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunPurpose {
    pub id: DbId,
    pub alias: String,
}

/// Lab-defined classification of sequencing quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QcStatus {
    pub id: DbId,
    pub description: String,
    /// `None` means the status is neither a pass nor a fail (e.g. "pending").
    pub qc_passed: Option<bool>,
}

macro_rules! identified {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Identified for $ty {
                const ENTITY: &'static str = $name;

                fn id(&self) -> DbId {
                    self.id
                }
            }
        )*
    };
}

identified! {
    Run => "Run",
    Partition => "Partition",
    LibraryAliquot => "LibraryAliquot",
    RunPurpose => "RunPurpose",
    QcStatus => "QcStatus",
}
