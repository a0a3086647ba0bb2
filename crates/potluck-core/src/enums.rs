//! Enum types for the potluck planner.
//!
//! Each enum has:
//! - Serialize/Deserialize as its canonical string
//! - Case-insensitive `FromStr` that rejects unknown values
//! - `as_str()`, `all()`, `Display`

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Macro: defines a closed enum with a fixed set of string variants.
// ---------------------------------------------------------------------------
macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $name:ident, kind = $kind:expr, default = $default:ident,
        variants: [
            $( ($variant:ident, $str:expr) ),+ $(,)?
        ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Returns the canonical string representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $str, )+
                }
            }

            /// Every variant, in declaration order.
            pub fn all() -> &'static [Self] {
                &[ $( Self::$variant, )+ ]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(CoreError::UnknownVariant {
                    kind: $kind,
                    value: s.to_owned(),
                })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

// ===========================================================================
// DietaryType
// ===========================================================================

define_enum! {
    /// Dietary category a dish is proposed under.
    DietaryType, kind = "dietary type", default = Vegan,
    variants: [
        (Vegan, "Vegan"),
        (Vegetarian, "Vegetarian"),
        (Carnivore, "Carnivore"),
    ]
}

// ===========================================================================
// Phase
// ===========================================================================

define_enum! {
    /// One step of the five-stage planning workflow.
    Phase, kind = "phase", default = Submit,
    variants: [
        (Submit, "submit"),
        (Vote, "vote"),
        (Select, "select"),
        (Ingredients, "ingredients"),
        (Shopping, "shopping"),
    ]
}

impl Phase {
    /// The phase a forward transition leads to, or `None` from `Shopping`.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Submit => Some(Self::Vote),
            Self::Vote => Some(Self::Select),
            Self::Select => Some(Self::Ingredients),
            Self::Ingredients => Some(Self::Shopping),
            Self::Shopping => None,
        }
    }

    /// The phase a back transition leads to, or `None` from `Submit`.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Submit => None,
            Self::Vote => Some(Self::Submit),
            Self::Select => Some(Self::Vote),
            Self::Ingredients => Some(Self::Select),
            Self::Shopping => Some(Self::Ingredients),
        }
    }

    /// 1-based step number, as shown to participants.
    pub fn step(&self) -> usize {
        match self {
            Self::Submit => 1,
            Self::Vote => 2,
            Self::Select => 3,
            Self::Ingredients => 4,
            Self::Shopping => 5,
        }
    }

    /// Short heading for the phase.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Submit => "Submit your dishes",
            Self::Vote => "Vote for dishes you like",
            Self::Select => "Top voted dishes",
            Self::Ingredients => "Add ingredients or link to a recipe",
            Self::Shopping => "Shopping list",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dietary_type_parses_case_insensitively() {
        assert_eq!("vegan".parse::<DietaryType>().unwrap(), DietaryType::Vegan);
        assert_eq!(
            " VEGETARIAN ".parse::<DietaryType>().unwrap(),
            DietaryType::Vegetarian
        );
        assert_eq!(
            "Carnivore".parse::<DietaryType>().unwrap(),
            DietaryType::Carnivore
        );
    }

    #[test]
    fn dietary_type_rejects_unknown() {
        let err = "pescatarian".parse::<DietaryType>().unwrap_err();
        assert!(err.to_string().contains("dietary type"));
        assert!(err.to_string().contains("pescatarian"));
    }

    #[test]
    fn dietary_type_serializes_canonical() {
        let json = serde_json::to_string(&DietaryType::Vegetarian).unwrap();
        assert_eq!(json, "\"Vegetarian\"");
        let back: DietaryType = serde_json::from_str("\"carnivore\"").unwrap();
        assert_eq!(back, DietaryType::Carnivore);
    }

    #[test]
    fn phase_forward_chain() {
        let mut phase = Phase::default();
        let mut seen = vec![phase];
        while let Some(next) = phase.next() {
            phase = next;
            seen.push(phase);
        }
        assert_eq!(seen, Phase::all());
    }

    #[test]
    fn phase_edges() {
        assert_eq!(Phase::Submit.previous(), None);
        assert_eq!(Phase::Shopping.next(), None);
        assert_eq!(Phase::Shopping.previous(), Some(Phase::Ingredients));
    }

    #[test]
    fn phase_steps_are_sequential() {
        let steps: Vec<usize> = Phase::all().iter().map(Phase::step).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5]);
    }
}
