//! Phase-sequenced planning workflow.
//!
//! The components here own the planner's data: [`DishRegistry`] for
//! proposals, [`VoteBox`] for ballots and the tally, and [`IngredientLedger`]
//! for ingredients and the shopping list. [`Workflow`] ties them to the
//! five planning phases.
//!
//! Every operation reads through to the [`potluck_storage::Store`] and keeps
//! no data in memory between calls, so separate processes see each other's
//! writes on their next read.

pub mod error;
pub mod ledger;
mod records;
pub mod registry;
pub mod votes;
pub mod workflow;

pub use error::{Result, WorkflowError};
pub use ledger::IngredientLedger;
pub use registry::DishRegistry;
pub use votes::{VoteBox, VoteReceipt};
pub use workflow::{Action, Selection, Workflow, WorkflowContext, WorkflowSettings};
