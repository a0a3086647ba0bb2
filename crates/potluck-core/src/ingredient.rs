//! Ingredient entries and shopping list aggregation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One ingredient a participant attached to a selected dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientEntry {
    pub dish: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_url: Option<String>,
}

/// One line of the consolidated shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListLine {
    pub ingredient: String,
    pub unit: String,
    pub total_quantity: f64,
}

/// Groups entries by `(name, unit)` and sums their quantities.
///
/// The dish an entry belongs to is ignored: the result is one global list,
/// sorted by ingredient name and then unit. Quantities within a group are
/// summed in ascending order so the totals do not depend on the order the
/// entries were submitted in.
pub fn aggregate<'a, I>(entries: I) -> Vec<ShoppingListLine>
where
    I: IntoIterator<Item = &'a IngredientEntry>,
{
    let mut groups: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry((entry.name.as_str(), entry.unit.as_str()))
            .or_default()
            .push(entry.quantity);
    }

    groups
        .into_iter()
        .map(|((name, unit), mut quantities)| {
            quantities.sort_by(f64::total_cmp);
            ShoppingListLine {
                ingredient: name.to_owned(),
                unit: unit.to_owned(),
                total_quantity: quantities.iter().sum(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn entry(dish: &str, name: &str, quantity: f64, unit: &str) -> IngredientEntry {
        IngredientEntry {
            dish: dish.into(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            recipe_url: None,
        }
    }

    fn line(ingredient: &str, unit: &str, total_quantity: f64) -> ShoppingListLine {
        ShoppingListLine {
            ingredient: ingredient.into(),
            unit: unit.into(),
            total_quantity,
        }
    }

    #[test]
    fn sums_across_dishes() {
        let entries = vec![
            entry("Pasta", "flour", 2.0, "cups"),
            entry("Soup", "flour", 1.0, "cups"),
            entry("Pasta", "salt", 5.0, "g"),
        ];
        assert_eq!(
            aggregate(&entries),
            vec![line("flour", "cups", 3.0), line("salt", "g", 5.0)]
        );
    }

    #[test]
    fn different_units_stay_separate() {
        let entries = vec![
            entry("Cake", "sugar", 200.0, "g"),
            entry("Tea", "sugar", 2.0, "tbsp"),
        ];
        assert_eq!(
            aggregate(&entries),
            vec![line("sugar", "g", 200.0), line("sugar", "tbsp", 2.0)]
        );
    }

    #[test]
    fn repeated_entries_sum() {
        let entries = vec![
            entry("Pasta", "garlic", 2.0, "cloves"),
            entry("Pasta", "garlic", 2.0, "cloves"),
        ];
        assert_eq!(aggregate(&entries), vec![line("garlic", "cloves", 4.0)]);
    }

    #[test]
    fn empty_input() {
        assert!(aggregate(&Vec::<IngredientEntry>::new()).is_empty());
    }

    #[test]
    fn output_sorted_by_name() {
        let entries = vec![
            entry("X", "zucchini", 1.0, "units"),
            entry("X", "basil", 1.0, "bunch"),
            entry("X", "leek", 1.0, "units"),
        ];
        let names: Vec<String> = aggregate(&entries)
            .into_iter()
            .map(|l| l.ingredient)
            .collect();
        assert_eq!(names, vec!["basil", "leek", "zucchini"]);
    }

    fn arb_entries() -> impl Strategy<Value = Vec<IngredientEntry>> {
        let name = prop::sample::select(vec!["flour", "salt", "eggs", "milk"]);
        let unit = prop::sample::select(vec!["g", "cups", "units"]);
        let dish = prop::sample::select(vec!["Pasta", "Soup", "Cake"]);
        prop::collection::vec((dish, name, 0.0f64..1000.0, unit), 0..24).prop_map(|rows| {
            rows.into_iter()
                .map(|(d, n, q, u)| entry(d, n, q, u))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn aggregation_is_order_independent(
            (original, shuffled) in arb_entries()
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            prop_assert_eq!(aggregate(&original), aggregate(&shuffled));
        }

        #[test]
        fn aggregation_preserves_total(entries in arb_entries()) {
            let input: f64 = entries.iter().map(|e| e.quantity).sum();
            let output: f64 = aggregate(&entries).iter().map(|l| l.total_quantity).sum();
            prop_assert!((input - output).abs() < 1e-6);
        }
    }
}
