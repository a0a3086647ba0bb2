//! The named record collections the planner persists.

use std::fmt;

/// A named collection ("sheet") in the tabular store.
///
/// Each collection has a fixed header row; data rows are ordered lists of
/// string fields matching that header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Proposed dishes: `id, name, type`.
    Dishes,
    /// The vote tally: `dish, votes`.
    Votes,
    /// Ingredient entries: `dish, name, qty, unit, recipe_url`.
    Ingredients,
    /// Submitted ballots, used to enforce one vote per participant:
    /// `voter, submitted_at`.
    Ballots,
}

impl Collection {
    /// Returns the collection's name in the store.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dishes => "dishes",
            Self::Votes => "votes",
            Self::Ingredients => "ingredients",
            Self::Ballots => "ballots",
        }
    }

    /// Returns the header row.
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Self::Dishes => &["id", "name", "type"],
            Self::Votes => &["dish", "votes"],
            Self::Ingredients => &["dish", "name", "qty", "unit", "recipe_url"],
            Self::Ballots => &["voter", "submitted_at"],
        }
    }

    /// Every collection, in reset order.
    pub fn all() -> &'static [Self] {
        &[Self::Dishes, Self::Votes, Self::Ingredients, Self::Ballots]
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
