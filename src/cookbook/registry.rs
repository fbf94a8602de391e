// src/cookbook/registry.rs

//! In-memory entry store
//!
//! Two name-keyed maps, one per entry kind, with the invariant that a name
//! keys at most one of them. The store is only mutated through
//! [`Cookbook::commit`], which assumes validation already happened; callers
//! wanting the full admission flow use [`Cookbook::register`].

use crate::cookbook::validate::validate_entry;
use crate::cookbook::{Entry, EntryPayload, Ingredient, Recipe};
use crate::error::Result;
use std::collections::HashMap;

/// The registry of all known ingredients and recipes
#[derive(Debug, Default)]
pub struct Cookbook {
    ingredients: HashMap<String, Ingredient>,
    recipes: HashMap<String, Recipe>,
}

impl Cookbook {
    /// Create an empty cookbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a name is registered, as either kind
    pub fn contains(&self, name: &str) -> bool {
        self.ingredients.contains_key(name) || self.recipes.contains_key(name)
    }

    /// Look up a registered ingredient
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(name)
    }

    /// Look up a registered recipe
    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// Number of registered entries across both kinds
    pub fn entry_count(&self) -> usize {
        self.ingredients.len() + self.recipes.len()
    }

    /// Insert a validated entry
    ///
    /// The entry must have passed [`validate_entry`]; in particular its name
    /// must not already be registered. Always succeeds.
    pub fn commit(&mut self, entry: Entry) {
        match entry {
            Entry::Ingredient(ingredient) => {
                self.ingredients.insert(ingredient.name.clone(), ingredient);
            }
            Entry::Recipe(recipe) => {
                self.recipes.insert(recipe.name.clone(), recipe);
            }
        }
    }

    /// Validate a registration payload and commit it on success
    pub fn register(&mut self, payload: &EntryPayload) -> Result<()> {
        let entry = validate_entry(self, payload)?;
        self.commit(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_commit_inserts_by_kind() {
        let mut cookbook = Cookbook::new();
        cookbook.commit(Entry::Ingredient(Ingredient {
            name: "egg".to_string(),
            cook_time: 2,
        }));
        cookbook.commit(Entry::Recipe(Recipe {
            name: "omelette".to_string(),
            required_items: vec![],
        }));

        assert!(cookbook.ingredient("egg").is_some());
        assert!(cookbook.recipe("egg").is_none());
        assert!(cookbook.recipe("omelette").is_some());
        assert!(cookbook.ingredient("omelette").is_none());
        assert_eq!(cookbook.entry_count(), 2);
    }

    #[test]
    fn test_contains_spans_both_kinds() {
        let mut cookbook = Cookbook::new();
        assert!(!cookbook.contains("egg"));

        cookbook.register(&EntryPayload::ingredient("egg", 2)).unwrap();
        cookbook.register(&EntryPayload::recipe("omelette", vec![])).unwrap();

        assert!(cookbook.contains("egg"));
        assert!(cookbook.contains("omelette"));
        assert!(!cookbook.contains("butter"));
    }

    #[test]
    fn test_register_rejects_without_mutating() {
        let mut cookbook = Cookbook::new();
        let err = cookbook
            .register(&EntryPayload::ingredient("egg", -1))
            .unwrap_err();

        assert_eq!(err, Error::NegativeCookTime(-1));
        assert_eq!(cookbook.entry_count(), 0);

        // The name stays free after a rejection
        cookbook.register(&EntryPayload::ingredient("egg", 2)).unwrap();
        assert!(cookbook.contains("egg"));
    }

    #[test]
    fn test_second_registration_always_rejects_as_duplicate() {
        let mut cookbook = Cookbook::new();
        cookbook.register(&EntryPayload::ingredient("egg", 2)).unwrap();

        // Same name again, as either kind
        let err = cookbook
            .register(&EntryPayload::ingredient("egg", 5))
            .unwrap_err();
        assert_eq!(err, Error::DuplicateName("egg".to_string()));

        let err = cookbook
            .register(&EntryPayload::recipe("egg", vec![]))
            .unwrap_err();
        assert_eq!(err, Error::DuplicateName("egg".to_string()));
    }
}
