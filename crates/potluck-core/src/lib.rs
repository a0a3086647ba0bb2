//! Core types and pure operations for the potluck meal planner.
//!
//! Nothing here performs I/O: ranking, aggregation and validation work on
//! plain values so that every phase can recompute them from freshly loaded
//! store data.

pub mod dish;
pub mod enums;
pub mod error;
pub mod idgen;
pub mod ingredient;
pub mod policy;
pub mod tally;
pub mod validation;

pub use dish::Dish;
pub use enums::{DietaryType, Phase};
pub use error::CoreError;
pub use ingredient::{IngredientEntry, ShoppingListLine};
pub use policy::{DuplicatePolicy, VotePolicy};
pub use tally::Tally;
