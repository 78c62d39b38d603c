//! Library aliquot rows.

use runqc_core::entities::LibraryAliquot;
use runqc_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `library_aliquots` table.
#[derive(Debug, Clone, FromRow)]
pub struct LibraryAliquotRow {
    pub id: DbId,
    pub name: String,
    pub library_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<LibraryAliquotRow> for LibraryAliquot {
    fn from(row: LibraryAliquotRow) -> Self {
        LibraryAliquot {
            id: row.id,
            name: row.name,
            library_id: row.library_id,
        }
    }
}
