//! The dish registry: proposals keyed by case-insensitive name.

use chrono::Utc;
use tracing::{debug, info};

use potluck_core::idgen::generate_dish_id;
use potluck_core::policy::DuplicatePolicy;
use potluck_core::validation;
use potluck_core::{DietaryType, Dish};
use potluck_storage::{Collection, Store};

use crate::error::{Result, StoreResultExt, WorkflowError};
use crate::records::{dish_from_record, dish_row};

/// Attempts at finding an id not already in the registry.
const MAX_ID_ATTEMPTS: u32 = 10;

/// Add, list and remove dish proposals.
pub struct DishRegistry<'a> {
    store: &'a dyn Store,
    duplicates: DuplicatePolicy,
}

impl<'a> DishRegistry<'a> {
    pub fn new(store: &'a dyn Store, duplicates: DuplicatePolicy) -> Self {
        Self { store, duplicates }
    }

    /// Proposes a dish.
    ///
    /// Returns `Ok(None)` without touching the store when the name is blank.
    /// The duplicate check and the append are separate round trips, so two
    /// participants adding the same name at once can both succeed.
    pub fn add(&self, name: &str, dietary_type: DietaryType) -> Result<Option<Dish>> {
        let Some(name) = validation::required(name) else {
            debug!("ignoring dish proposal with empty name");
            return Ok(None);
        };

        let existing = self.list()?;
        if self.duplicates == DuplicatePolicy::Reject {
            if let Some(dish) = existing.iter().find(|d| d.matches(name)) {
                return Err(WorkflowError::DuplicateDish {
                    name: name.to_owned(),
                    existing: dish.name.clone(),
                });
            }
        }

        let now = Utc::now();
        let id = (0..MAX_ID_ATTEMPTS)
            .map(|nonce| generate_dish_id(name, dietary_type, now, nonce))
            .find(|candidate| existing.iter().all(|d| &d.id != candidate))
            .ok_or(WorkflowError::IdExhausted {
                attempts: MAX_ID_ATTEMPTS,
            })?;

        let dish = Dish::new(id, name, dietary_type);
        self.store
            .append_row(Collection::Dishes, &dish_row(&dish))
            .during("add dish")?;
        info!(id = %dish.id, name = %dish.name, dietary_type = %dish.dietary_type, "dish added");
        Ok(Some(dish))
    }

    /// All proposed dishes in store order.
    pub fn list(&self) -> Result<Vec<Dish>> {
        let records = self
            .store
            .read_rows(Collection::Dishes)
            .during("read dishes")?;
        records
            .iter()
            .map(|r| dish_from_record(r).map_err(WorkflowError::from))
            .collect()
    }

    /// Finds the first dish whose name matches, ignoring case.
    pub fn find(&self, name: &str) -> Result<Option<Dish>> {
        Ok(self.list()?.into_iter().find(|d| d.matches(name)))
    }

    /// Removes every dish whose name matches, ignoring case, and returns how
    /// many rows were removed.
    ///
    /// This is a read followed by a full rewrite: a dish added by someone else
    /// between the two round trips is lost.
    pub fn remove(&self, name: &str) -> Result<usize> {
        let dishes = self.list()?;
        let (removed, kept): (Vec<Dish>, Vec<Dish>) =
            dishes.into_iter().partition(|d| d.matches(name));

        if removed.is_empty() {
            debug!(name, "no dish to remove");
            return Ok(0);
        }

        let rows: Vec<Vec<String>> = kept.iter().map(dish_row).collect();
        self.store
            .rewrite(Collection::Dishes, &rows)
            .during("remove dish")?;
        info!(name, removed = removed.len(), "dish removed");
        Ok(removed.len())
    }
}
