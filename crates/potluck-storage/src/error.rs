//! Store error types.

/// Errors that can occur during store operations.
///
/// Every variant carries enough context to name the operation that failed;
/// callers surface these unchanged and never retry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to establish or maintain a database connection.
    #[error("connection error: {0}")]
    Connection(String),

    /// A row did not fit the collection's header.
    #[error("{collection}: {reason}")]
    Schema {
        /// Name of the collection the row was destined for.
        collection: String,
        /// What was wrong with the row.
        reason: String,
    },

    /// A targeted delete referenced a row that does not exist.
    #[error("{collection}: no data row at index {index} (collection has {len} rows)")]
    RowOutOfRange {
        /// Name of the collection.
        collection: String,
        /// The requested 0-based data row index.
        index: usize,
        /// Number of data rows present.
        len: usize,
    },

    /// The database was written by a newer, incompatible version.
    #[error("schema version {found} is newer than supported version {supported}")]
    SchemaVersion {
        /// Version recorded in the database.
        found: i32,
        /// Highest version this build understands.
        supported: i32,
    },

    /// Creating tables or writing schema metadata failed.
    #[error("schema initialisation step {step} failed: {reason}")]
    Init {
        /// The initialisation step that failed.
        step: String,
        /// Underlying error description.
        reason: String,
    },

    /// A raw SQLite query error.
    #[error("query error: {0}")]
    Query(#[from] rusqlite::Error),

    /// A row's field list could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the storage crate.
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Creates a [`StoreError::Schema`] for the given collection.
    pub fn schema(collection: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            collection: collection.into(),
            reason: reason.into(),
        }
    }
}
