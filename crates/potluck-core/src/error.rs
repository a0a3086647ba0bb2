//! Core error types.

/// Errors raised while parsing or validating domain values.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A string did not name any known variant of a closed enum.
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant {
        /// The enum being parsed (e.g., "phase").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A stored record was missing a required field.
    #[error("{entity} record is missing field {field:?}")]
    MissingField {
        /// The kind of record (e.g., "dish").
        entity: &'static str,
        /// The absent column name.
        field: &'static str,
    },

    /// A stored field could not be interpreted.
    #[error("{entity} field {field:?} has invalid value {value:?}")]
    InvalidField {
        /// The kind of record.
        entity: &'static str,
        /// The column name.
        field: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },
}

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
