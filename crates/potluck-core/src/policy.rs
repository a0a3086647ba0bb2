//! Configurable workflow policies.

use serde::{Deserialize, Serialize};

/// Whether a participant may submit more than one ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VotePolicy {
    /// Any participant may vote any number of times.
    #[default]
    Unlimited,
    /// Each participant may submit one ballot until the next reset.
    OncePerVoter,
}

/// How the dish registry treats a name that is already proposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Refuse a proposal whose name matches an existing dish.
    #[default]
    Reject,
    /// Accept it; both rows persist and share votes and ingredients.
    Allow,
}
