//! In-memory sink for tests and library embedding

use crate::item::Recipe;
use crate::output::traits::{OutputResult, RecipeSink};
use std::sync::{Arc, Mutex};

/// Collects recipes in memory; clones share the same backing store
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    recipes: Arc<Mutex<Vec<Recipe>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of everything recorded so far
    pub fn recipes(&self) -> Vec<Recipe> {
        self.recipes.lock().expect("sink lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.recipes.lock().expect("sink lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecipeSink for MemorySink {
    fn record_recipe(&mut self, recipe: &Recipe) -> OutputResult<()> {
        self.recipes
            .lock()
            .expect("sink lock poisoned")
            .push(recipe.clone());
        Ok(())
    }
}
