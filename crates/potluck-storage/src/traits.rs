//! The Store trait -- the public API for collection persistence.
//!
//! The planner depends on this trait rather than on a concrete backend so
//! that a transactional or serialized store can be substituted.
//!
//! The contract deliberately offers no compare-and-swap and no multi-call
//! transactions. A caller that reads, modifies and then rewrites a
//! collection races with every other writer: the last full rewrite wins.

use crate::collection::Collection;
use crate::error::Result;
use crate::record::Record;

/// Row-level primitives over the named collections.
///
/// Each method is a single round trip to the backend.
pub trait Store: Send + Sync {
    /// Appends one data row. `fields` must match the collection header.
    fn append_row(&self, collection: Collection, fields: &[String]) -> Result<()>;

    /// Reads every data row in store order. An empty collection yields an
    /// empty vector.
    fn read_rows(&self, collection: Collection) -> Result<Vec<Record>>;

    /// Removes every data row and (re-)writes the header row.
    fn clear(&self, collection: Collection) -> Result<()>;

    /// Deletes the data row at the 0-based `index` (store order).
    fn delete_row(&self, collection: Collection, index: usize) -> Result<()>;

    /// Replaces every data row with `rows`.
    fn rewrite(&self, collection: Collection, rows: &[Vec<String>]) -> Result<()>;

    /// Returns the collection's header row as stored.
    fn header(&self, collection: Collection) -> Result<Vec<String>>;

    /// Clears every collection, leaving header-only state behind.
    fn reset(&self) -> Result<()> {
        for collection in Collection::all() {
            self.clear(*collection)?;
        }
        Ok(())
    }
}
