//! Tabular store adapter for the potluck planner.
//!
//! Provides the [`Store`] trait over the named [`Collection`]s and a SQLite
//! implementation ([`SqliteStore`]).

pub mod collection;
pub mod error;
pub mod record;
pub mod sqlite;
pub mod traits;

// Re-exports for convenience.
pub use collection::Collection;
pub use error::StoreError;
pub use record::Record;
pub use sqlite::SqliteStore;
pub use traits::Store;

// ---------------------------------------------------------------------------
// Store trait implementation for SqliteStore
// ---------------------------------------------------------------------------

use crate::error::Result;

impl Store for SqliteStore {
    fn append_row(&self, collection: Collection, fields: &[String]) -> Result<()> {
        self.append_row_impl(collection, fields)
    }

    fn read_rows(&self, collection: Collection) -> Result<Vec<Record>> {
        self.read_rows_impl(collection)
    }

    fn clear(&self, collection: Collection) -> Result<()> {
        self.clear_impl(collection)
    }

    fn delete_row(&self, collection: Collection, index: usize) -> Result<()> {
        self.delete_row_impl(collection, index)
    }

    fn rewrite(&self, collection: Collection, rows: &[Vec<String>]) -> Result<()> {
        self.rewrite_impl(collection, rows)
    }

    fn header(&self, collection: Collection) -> Result<Vec<String>> {
        self.header_impl(collection)
    }
}
