// src/cookbook/validate.rs

//! Admission checks for registration payloads
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the declared type names one of the two entry kinds
//! 2. the name is not already registered (as either kind)
//! 3. an ingredient carries a non-negative cook time
//! 4. a recipe lists each required item at most once
//!
//! Nothing else is checked here. Required-item quantities are accepted as
//! given, and dependency names are not required to exist yet; dangling
//! references surface at query time in the resolver.

use crate::cookbook::{Cookbook, Entry, EntryPayload, Ingredient, Recipe};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Decide whether a payload may enter the cookbook
///
/// Pure with respect to the cookbook: on success the parsed [`Entry`] is
/// returned for [`Cookbook::commit`] to insert, and no mutation happens
/// here.
pub fn validate_entry(cookbook: &Cookbook, payload: &EntryPayload) -> Result<Entry> {
    if payload.kind != "recipe" && payload.kind != "ingredient" {
        return Err(Error::InvalidKind);
    }

    if cookbook.contains(&payload.name) {
        return Err(Error::DuplicateName(payload.name.clone()));
    }

    if payload.kind == "ingredient" {
        let cook_time = payload.cook_time.ok_or(Error::MissingField("cookTime"))?;
        if cook_time < 0 {
            return Err(Error::NegativeCookTime(cook_time));
        }
        Ok(Entry::Ingredient(Ingredient {
            name: payload.name.clone(),
            cook_time: cook_time as u64,
        }))
    } else {
        let items = payload
            .required_items
            .as_ref()
            .ok_or(Error::MissingField("requiredItems"))?;

        let mut seen = HashSet::new();
        for item in items {
            if !seen.insert(item.name.as_str()) {
                return Err(Error::DuplicateRequiredItem(item.name.clone()));
            }
        }

        Ok(Entry::Recipe(Recipe {
            name: payload.name.clone(),
            required_items: items.clone(),
        }))
    }
}
