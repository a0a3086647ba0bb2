//! Workflow error types.

use potluck_core::Phase;
use potluck_core::error::CoreError;
use potluck_core::validation::ValidationError;
use potluck_storage::StoreError;

/// Errors surfaced by workflow operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// A store round trip failed. `operation` names what was being done.
    #[error("failed to {operation}: {source}")]
    Store {
        operation: &'static str,
        #[source]
        source: StoreError,
    },

    /// A stored row could not be interpreted.
    #[error("corrupt record: {0}")]
    Record(#[from] CoreError),

    /// An action was invoked outside the phase it belongs to.
    #[error("cannot {action} during the {current} phase (only during {expected})")]
    WrongPhase {
        action: &'static str,
        expected: Phase,
        current: Phase,
    },

    /// A forward transition was requested from the last phase.
    #[error("already at the last phase ({current})")]
    NoNextPhase { current: Phase },

    /// A back transition was requested from the first phase.
    #[error("already at the first phase ({current})")]
    NoPreviousPhase { current: Phase },

    /// A dish with the same name (ignoring case) is already proposed.
    #[error("a dish named {existing:?} is already proposed")]
    DuplicateDish { name: String, existing: String },

    /// Every candidate id collided with an existing dish.
    #[error("failed to generate a unique dish id after {attempts} attempts")]
    IdExhausted { attempts: u32 },

    /// An ingredient named a dish outside the current top selection.
    #[error("{dish:?} is not one of the selected dishes")]
    DishNotSelected { dish: String },

    /// The participant already submitted a ballot under the once-per-voter policy.
    #[error("{voter} has already voted")]
    AlreadyVoted { voter: String },

    /// An ingredient quantity was unusable.
    #[error("invalid ingredient: {0}")]
    InvalidQuantity(#[from] ValidationError),
}

/// Convenience alias used throughout the workflow crate.
pub type Result<T> = std::result::Result<T, WorkflowError>;

/// Attaches the name of the failed operation to a store result.
pub(crate) trait StoreResultExt<T> {
    fn during(self, operation: &'static str) -> Result<T>;
}

impl<T> StoreResultExt<T> for std::result::Result<T, StoreError> {
    fn during(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| WorkflowError::Store { operation, source })
    }
}
