// src/lib.rs

//! Larder - in-memory cookbook registry
//!
//! Stores named entries of two kinds - atomic ingredients with a fixed cook
//! time, and composite recipes referencing other entries by name - and
//! answers summary queries that expand a recipe into its total
//! base-ingredient quantities and aggregate preparation time.
//!
//! # Architecture
//!
//! - Registry-first: one [`cookbook::Cookbook`] owns all entry data
//! - Admission: [`cookbook::validate_entry`] decides, [`cookbook::Cookbook::commit`] inserts
//! - Resolution: [`resolver`] walks the dependency graph with a per-query
//!   memo, detecting dangling references and cycles
//! - Transport: [`server`] wraps the core in an axum HTTP API behind one
//!   coarse lock

pub mod cookbook;
mod error;
pub mod name;
pub mod resolver;
pub mod server;

pub use cookbook::{validate_entry, Cookbook, Entry, EntryPayload, Ingredient, Recipe, RequiredItem};
pub use error::{Error, Result};
pub use resolver::{aggregate, summarize, Closure, IngredientTally, RecipeSummary, Resolver};
