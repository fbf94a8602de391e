// src/error.rs

//! Error types for the cookbook registry and resolution engine
//!
//! Every user-facing rejection is a variant here; the HTTP layer maps each
//! variant to a status code and forwards the message verbatim. `Internal`
//! covers precondition violations in code paths that assume validation has
//! already happened.

use thiserror::Error;

/// Convenience result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by entry validation and recipe resolution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Entry type was neither "recipe" nor "ingredient"
    #[error("type can only be \"recipe\" or \"ingredient\"")]
    InvalidKind,

    /// An entry with the same name is already registered (as either kind)
    #[error("an entry named '{0}' already exists")]
    DuplicateName(String),

    /// Ingredient cook time was negative
    #[error("cookTime of an ingredient must be non-negative, got {0}")]
    NegativeCookTime(i64),

    /// A recipe listed the same required item twice
    #[error("requiredItems can only have one element per name, '{0}' appears twice")]
    DuplicateRequiredItem(String),

    /// A field required for the declared entry type was absent
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// Summary was requested for an ingredient
    #[error("'{0}' is an ingredient, not a recipe")]
    NotARecipe(String),

    /// Summary was requested for a name with no registered recipe
    #[error("no recipe named '{0}' is registered")]
    UnknownRecipe(String),

    /// A recipe's transitive closure reaches an unregistered name
    #[error("recipe depends on unregistered item '{0}'")]
    UnresolvedDependency(String),

    /// A recipe's transitive closure loops back on itself
    #[error("circular dependency detected at '{0}'")]
    CircularDependency(String),

    /// A defect: an invariant the caller was supposed to uphold did not hold
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an internal error from any message
    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }

    /// Stable machine-readable code for the transport layer
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidKind => "invalid_type",
            Error::DuplicateName(_) => "duplicate_name",
            Error::NegativeCookTime(_) => "negative_cook_time",
            Error::DuplicateRequiredItem(_) => "duplicate_required_item",
            Error::MissingField(_) => "missing_field",
            Error::NotARecipe(_) => "not_a_recipe",
            Error::UnknownRecipe(_) => "unknown_recipe",
            Error::UnresolvedDependency(_) => "unresolved_dependency",
            Error::CircularDependency(_) => "circular_dependency",
            Error::Internal(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = Error::DuplicateName("egg".to_string());
        assert!(err.to_string().contains("egg"));

        let err = Error::UnresolvedDependency("butter".to_string());
        assert!(err.to_string().contains("butter"));
    }

    #[test]
    fn test_codes_are_distinct() {
        use std::collections::HashSet;

        let errors = [
            Error::InvalidKind,
            Error::DuplicateName(String::new()),
            Error::NegativeCookTime(-1),
            Error::DuplicateRequiredItem(String::new()),
            Error::MissingField("cookTime"),
            Error::NotARecipe(String::new()),
            Error::UnknownRecipe(String::new()),
            Error::UnresolvedDependency(String::new()),
            Error::CircularDependency(String::new()),
            Error::internal("boom"),
        ];
        let codes: HashSet<&str> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }
}
