//! Conversions between domain values and store rows.

use chrono::{DateTime, Utc};

use potluck_core::error::{CoreError, Result};
use potluck_core::{DietaryType, Dish, IngredientEntry};
use potluck_storage::Record;

fn field<'r>(record: &'r Record, entity: &'static str, name: &'static str) -> Result<&'r str> {
    record
        .get(name)
        .ok_or(CoreError::MissingField { entity, field: name })
}

fn invalid(entity: &'static str, field: &'static str, value: &str) -> CoreError {
    CoreError::InvalidField {
        entity,
        field,
        value: value.to_owned(),
    }
}

// -- dishes ------------------------------------------------------------------

pub(crate) fn dish_row(dish: &Dish) -> Vec<String> {
    vec![
        dish.id.clone(),
        dish.name.clone(),
        dish.dietary_type.to_string(),
    ]
}

pub(crate) fn dish_from_record(record: &Record) -> Result<Dish> {
    let raw_type = field(record, "dish", "type")?;
    let dietary_type: DietaryType = raw_type
        .parse()
        .map_err(|_| invalid("dish", "type", raw_type))?;
    Ok(Dish::new(
        field(record, "dish", "id")?,
        field(record, "dish", "name")?,
        dietary_type,
    ))
}

// -- votes -------------------------------------------------------------------

pub(crate) fn vote_row(name: &str, count: u32) -> Vec<String> {
    vec![name.to_owned(), count.to_string()]
}

pub(crate) fn vote_from_record(record: &Record) -> Result<(String, u32)> {
    let name = field(record, "vote", "dish")?;
    let raw = field(record, "vote", "votes")?;
    let count = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| invalid("vote", "votes", raw))?;
    Ok((name.to_owned(), count))
}

// -- ingredients -------------------------------------------------------------

pub(crate) fn ingredient_row(entry: &IngredientEntry) -> Vec<String> {
    vec![
        entry.dish.clone(),
        entry.name.clone(),
        entry.quantity.to_string(),
        entry.unit.clone(),
        entry.recipe_url.clone().unwrap_or_default(),
    ]
}

pub(crate) fn ingredient_from_record(record: &Record) -> Result<IngredientEntry> {
    let raw_qty = field(record, "ingredient", "qty")?;
    let quantity = raw_qty
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite() && *q >= 0.0)
        .ok_or_else(|| invalid("ingredient", "qty", raw_qty))?;
    let recipe_url = record
        .get("recipe_url")
        .filter(|url| !url.is_empty())
        .map(str::to_owned);

    Ok(IngredientEntry {
        dish: field(record, "ingredient", "dish")?.to_owned(),
        name: field(record, "ingredient", "name")?.to_owned(),
        quantity,
        unit: field(record, "ingredient", "unit")?.to_owned(),
        recipe_url,
    })
}

// -- ballots -----------------------------------------------------------------

pub(crate) fn ballot_row(voter: &str, submitted_at: DateTime<Utc>) -> Vec<String> {
    vec![voter.to_owned(), submitted_at.to_rfc3339()]
}

pub(crate) fn ballot_voter(record: &Record) -> Result<&str> {
    field(record, "ballot", "voter")
}
