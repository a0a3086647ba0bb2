//! Dish proposals.

use serde::{Deserialize, Serialize};

use crate::enums::DietaryType;

/// A dish proposed by a participant during the submit phase.
///
/// `id` is a stable per-entity identifier for UIs; `name` is the identity
/// key used by voting, ingredients and deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub dietary_type: DietaryType,
}

impl Dish {
    pub fn new(id: impl Into<String>, name: impl Into<String>, dietary_type: DietaryType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dietary_type,
        }
    }

    /// Returns `true` if `name` refers to this dish.
    pub fn matches(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Normalised form of a dish name used as its identity key.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Case-insensitive dish name comparison.
pub fn names_match(a: &str, b: &str) -> bool {
    name_key(a) == name_key(b)
}
