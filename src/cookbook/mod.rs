// src/cookbook/mod.rs

//! The cookbook registry: named entries and their admission rules
//!
//! A cookbook stores two kinds of entry, keyed by name:
//! - **Ingredient**: a leaf with a fixed cook time
//! - **Recipe**: an ordered list of required items, each a `(name, quantity)`
//!   pair pointing at another entry
//!
//! Names are unique across both kinds. Recipes may reference names that are
//! not registered yet; dangling references are only detected when a query
//! traverses them (see [`crate::resolver`]).
//!
//! Registration is a two-step flow: [`validate_entry`] decides admissibility
//! against the current registry contents and parses the payload into a
//! domain [`Entry`], then [`Cookbook::commit`] performs the insertion.
//! Entries live for the process lifetime; there is no update or delete.

mod entry;
mod registry;
mod validate;

pub use entry::{Entry, EntryPayload, Ingredient, Recipe, RequiredItem};
pub use registry::Cookbook;
pub use validate::validate_entry;

#[cfg(test)]
pub(crate) use entry::required;
