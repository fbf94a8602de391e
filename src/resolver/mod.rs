// src/resolver/mod.rs

//! Recipe resolution: closure validity and quantity aggregation
//!
//! Both algorithms walk the dependency graph that `requiredItems` edges form
//! over the cookbook, keyed by entry name.
//!
//! The **closure check** decides whether every name a recipe transitively
//! reaches is registered. It memoizes per top-level query: a [`Resolver`] is
//! constructed fresh for each query and never reused across registry
//! mutations, so the memo cannot go stale. The walk keeps an explicit
//! in-progress set, so a dependency cycle (recipe A requires B requires A)
//! is detected and reported as [`Closure::Cyclic`] rather than recursing
//! unboundedly.
//!
//! **Aggregation** flattens a recipe into its base-ingredient quantities,
//! multiplying quantities along each dependency chain. It assumes the
//! closure check already passed; reaching an unregistered name there is a
//! defect, not a user error.

use crate::cookbook::{Cookbook, RequiredItem};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Outcome of a closure-validity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Closure {
    /// Every transitively reachable name is registered
    Valid,
    /// The closure reaches this unregistered name
    Unresolved(String),
    /// The closure loops back through this name
    Cyclic(String),
}

impl Closure {
    pub fn is_valid(&self) -> bool {
        matches!(self, Closure::Valid)
    }
}

/// The flattened result of a summary query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub name: String,
    /// Total preparation time across all base ingredients
    pub cook_time: u64,
    /// Base-ingredient quantities, in first-discovered traversal order
    pub ingredients: Vec<RequiredItem>,
}

/// Accumulator for quantity aggregation
///
/// Tracks a running total per ingredient plus the order in which
/// ingredients were first discovered, so the rendered output follows the
/// traversal rather than map iteration order.
#[derive(Debug, Default)]
pub struct IngredientTally {
    totals: HashMap<String, u64>,
    order: Vec<String>,
}

impl IngredientTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn add(&mut self, name: &str, amount: u64) {
        match self.totals.get_mut(name) {
            Some(total) => *total += amount,
            None => {
                self.totals.insert(name.to_string(), amount);
                self.order.push(name.to_string());
            }
        }
    }

    /// Render the tally in discovery order
    pub fn into_items(self) -> Vec<RequiredItem> {
        let IngredientTally { totals, order } = self;
        order
            .into_iter()
            .map(|name| {
                let quantity = totals[&name];
                RequiredItem { name, quantity }
            })
            .collect()
    }
}

/// Closure-validity checker with a per-query memo
pub struct Resolver<'a> {
    cookbook: &'a Cookbook,
    memo: HashMap<String, Closure>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver for one query against the current registry state
    pub fn new(cookbook: &'a Cookbook) -> Self {
        Self {
            cookbook,
            memo: HashMap::new(),
        }
    }

    /// Check whether every name reachable from `name` is registered
    pub fn is_valid(&mut self, name: &str) -> bool {
        self.closure_of(name).is_valid()
    }

    /// Classify the closure rooted at `name`
    pub fn closure_of(&mut self, name: &str) -> Closure {
        let mut in_progress = HashSet::new();
        self.walk(name, &mut in_progress)
    }

    fn walk(&mut self, name: &str, in_progress: &mut HashSet<String>) -> Closure {
        if let Some(known) = self.memo.get(name) {
            return known.clone();
        }

        let cookbook = self.cookbook;
        if cookbook.ingredient(name).is_some() {
            self.memo.insert(name.to_string(), Closure::Valid);
            return Closure::Valid;
        }

        let Some(recipe) = cookbook.recipe(name) else {
            let flaw = Closure::Unresolved(name.to_string());
            self.memo.insert(name.to_string(), flaw.clone());
            return flaw;
        };

        // Re-entering a recipe whose closure is still being computed means
        // the dependency chain loops back on itself.
        if !in_progress.insert(name.to_string()) {
            return Closure::Cyclic(name.to_string());
        }

        let mut result = Closure::Valid;
        for item in &recipe.required_items {
            let dep = self.walk(&item.name, in_progress);
            if !dep.is_valid() {
                result = dep;
                break;
            }
        }

        in_progress.remove(name);
        self.memo.insert(name.to_string(), result.clone());
        result
    }
}

/// Accumulate base-ingredient quantities reachable from `name`
///
/// Precondition: the closure rooted at `name` is valid. Reaching an
/// unregistered name here is a programming error and reports as
/// [`Error::Internal`].
pub fn aggregate(
    cookbook: &Cookbook,
    name: &str,
    multiplier: u64,
    tally: &mut IngredientTally,
) -> Result<()> {
    if let Some(ingredient) = cookbook.ingredient(name) {
        tally.add(&ingredient.name, multiplier);
        return Ok(());
    }

    let Some(recipe) = cookbook.recipe(name) else {
        return Err(Error::internal(format!(
            "aggregation reached unregistered item '{name}'"
        )));
    };

    for item in &recipe.required_items {
        aggregate(cookbook, &item.name, multiplier * item.quantity, tally)?;
    }
    Ok(())
}

/// Expand a recipe into its base ingredients and total cook time
pub fn summarize(cookbook: &Cookbook, name: &str) -> Result<RecipeSummary> {
    if cookbook.ingredient(name).is_some() {
        return Err(Error::NotARecipe(name.to_string()));
    }
    if cookbook.recipe(name).is_none() {
        return Err(Error::UnknownRecipe(name.to_string()));
    }

    match Resolver::new(cookbook).closure_of(name) {
        Closure::Valid => {}
        Closure::Unresolved(dep) => return Err(Error::UnresolvedDependency(dep)),
        Closure::Cyclic(at) => return Err(Error::CircularDependency(at)),
    }

    let mut tally = IngredientTally::new();
    aggregate(cookbook, name, 1, &mut tally)?;

    let ingredients = tally.into_items();
    let mut cook_time = 0;
    for item in &ingredients {
        let ingredient = cookbook
            .ingredient(&item.name)
            .ok_or_else(|| Error::internal(format!("tally holds non-ingredient '{}'", item.name)))?;
        cook_time += item.quantity * ingredient.cook_time;
    }

    Ok(RecipeSummary {
        name: name.to_string(),
        cook_time,
        ingredients,
    })
}
