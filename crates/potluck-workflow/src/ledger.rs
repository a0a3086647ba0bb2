//! The ingredient ledger and shopping list.

use tracing::{debug, info};

use potluck_core::ingredient::aggregate;
use potluck_core::validation;
use potluck_core::{IngredientEntry, ShoppingListLine, dish::names_match};
use potluck_storage::{Collection, Store};

use crate::error::{Result, StoreResultExt};
use crate::records::{ingredient_from_record, ingredient_row};

/// Append-only ingredient entries.
pub struct IngredientLedger<'a> {
    store: &'a dyn Store,
}

impl<'a> IngredientLedger<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Records an ingredient for a dish.
    ///
    /// Returns `Ok(None)` when the dish, name or unit is blank. The dish is
    /// not checked against the current selection, and repeated entries are
    /// kept; they sum when the shopping list is built.
    pub fn add(
        &self,
        dish: &str,
        name: &str,
        quantity: f64,
        unit: &str,
        recipe_url: Option<&str>,
    ) -> Result<Option<IngredientEntry>> {
        let (Some(dish), Some(name), Some(unit)) = (
            validation::required(dish),
            validation::required(name),
            validation::required(unit),
        ) else {
            debug!("ignoring ingredient with empty dish, name or unit");
            return Ok(None);
        };
        let quantity = validation::quantity(quantity)?;

        let entry = IngredientEntry {
            dish: dish.to_owned(),
            name: name.to_owned(),
            quantity,
            unit: unit.to_owned(),
            recipe_url: validation::optional(recipe_url),
        };
        self.store
            .append_row(Collection::Ingredients, &ingredient_row(&entry))
            .during("add ingredient")?;
        info!(
            dish = %entry.dish,
            name = %entry.name,
            quantity,
            unit = %entry.unit,
            "ingredient added"
        );
        Ok(Some(entry))
    }

    /// Every entry in submission order.
    pub fn list(&self) -> Result<Vec<IngredientEntry>> {
        let records = self
            .store
            .read_rows(Collection::Ingredients)
            .during("read ingredients")?;
        let entries = records
            .iter()
            .map(ingredient_from_record)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// Entries attached to one dish, ignoring case.
    pub fn list_for(&self, dish: &str) -> Result<Vec<IngredientEntry>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|e| names_match(&e.dish, dish))
            .collect())
    }

    /// The consolidated shopping list, recomputed from the store.
    pub fn shopping_list(&self) -> Result<Vec<ShoppingListLine>> {
        Ok(aggregate(&self.list()?))
    }
}
