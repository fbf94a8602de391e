// src/cookbook/entry.rs

//! Entry variants and the registration wire payload

use serde::{Deserialize, Serialize};

/// A registered cookbook entry: exactly one of the two kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    /// The registry key for this entry
    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(ingredient) => &ingredient.name,
            Entry::Recipe(recipe) => &recipe.name,
        }
    }
}

/// A leaf entry with a fixed preparation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// Preparation time; non-negative by validation at the boundary
    pub cook_time: u64,
}

/// A composite entry referencing other entries by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    /// Dependencies in declaration order; names pairwise distinct
    pub required_items: Vec<RequiredItem>,
}

/// A `(name, quantity)` pair
///
/// Used both as a recipe's dependency declaration and as a summary output
/// line. Quantities are accepted as given; only ingredient cook times are
/// range-checked at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: u64,
}

/// Wire payload for entry registration
///
/// `kind` is carried as a plain string rather than a tagged enum so that an
/// illegal value reaches the validator and produces its rejection message
/// instead of a deserialization error. `cook_time` stays signed for the same
/// reason: a negative value must arrive intact to be rejected explicitly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub cook_time: Option<i64>,
    pub required_items: Option<Vec<RequiredItem>>,
}

impl EntryPayload {
    /// Payload for an ingredient registration
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Self {
            kind: "ingredient".to_string(),
            name: name.into(),
            cook_time: Some(cook_time),
            required_items: None,
        }
    }

    /// Payload for a recipe registration
    pub fn recipe(name: impl Into<String>, required_items: Vec<RequiredItem>) -> Self {
        Self {
            kind: "recipe".to_string(),
            name: name.into(),
            cook_time: None,
            required_items: Some(required_items),
        }
    }
}

/// Shorthand for building a required-item row in tests
#[cfg(test)]
pub(crate) fn required(name: &str, quantity: u64) -> RequiredItem {
    RequiredItem {
        name: name.to_string(),
        quantity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_field_names_follow_the_wire_format() {
        let payload: EntryPayload = serde_json::from_value(serde_json::json!({
            "type": "recipe",
            "name": "omelette",
            "requiredItems": [{"name": "egg", "quantity": 2}],
        }))
        .unwrap();

        assert_eq!(payload.kind, "recipe");
        assert_eq!(payload.name, "omelette");
        assert_eq!(payload.required_items, Some(vec![required("egg", 2)]));
        assert_eq!(payload.cook_time, None);
    }

    #[test]
    fn test_negative_cook_time_survives_deserialization() {
        let payload: EntryPayload = serde_json::from_value(serde_json::json!({
            "type": "ingredient",
            "name": "egg",
            "cookTime": -1,
        }))
        .unwrap();

        assert_eq!(payload.cook_time, Some(-1));
    }

    #[test]
    fn test_entry_name_covers_both_kinds() {
        let ingredient = Entry::Ingredient(Ingredient {
            name: "egg".to_string(),
            cook_time: 2,
        });
        let recipe = Entry::Recipe(Recipe {
            name: "omelette".to_string(),
            required_items: vec![required("egg", 2)],
        });

        assert_eq!(ingredient.name(), "egg");
        assert_eq!(recipe.name(), "omelette");
    }
}
