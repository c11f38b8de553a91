use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};
use tokio::sync::Mutex;

use super::fallback::fallback_recipes;
use super::{query, results, QuerySpec};
use crate::error::Result;
use crate::model::{InventoryItem, RecipeCandidate, UserPreferences};
use crate::providers::RecipeSource;

/// Recipe suggestions for one screen.
///
/// Refreshes may overlap (a preference toggle while a search is still in
/// flight); only the most recently started refresh publishes its result.
pub struct RecipeSession {
    source: Box<dyn RecipeSource>,
    generation: AtomicU64,
    displayed: Mutex<Vec<RecipeCandidate>>,
}

impl RecipeSession {
    pub fn new(source: Box<dyn RecipeSource>) -> Self {
        RecipeSession {
            source,
            generation: AtomicU64::new(0),
            displayed: Mutex::new(Vec::new()),
        }
    }

    /// Run normalize → build → search → process.
    ///
    /// Upstream failures count as zero results, so the caller always gets a
    /// non-empty list.
    pub async fn suggest(
        &self,
        items: &[InventoryItem],
        prefs: &UserPreferences,
        only_inventory: bool,
    ) -> Vec<RecipeCandidate> {
        let spec = query::build(items, prefs, only_inventory);
        self.suggest_for(&spec, prefs).await
    }

    /// Search with an already built query and process the results
    pub async fn suggest_for(&self, spec: &QuerySpec, prefs: &UserPreferences) -> Vec<RecipeCandidate> {
        let raw = match self.source.search(spec).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "Recipe search via {} failed, using fallback: {}",
                    self.source.provider_name(),
                    e
                );
                Vec::new()
            }
        };

        results::process(raw, prefs)
    }

    /// Fetch suggestions and publish them unless a newer refresh started
    /// meanwhile. Returns `None` when this refresh was superseded.
    pub async fn refresh(
        &self,
        items: &[InventoryItem],
        prefs: &UserPreferences,
        only_inventory: bool,
    ) -> Option<Vec<RecipeCandidate>> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let recipes = self.suggest(items, prefs, only_inventory).await;

        let mut displayed = self.displayed.lock().await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!("Dropping superseded recipe refresh #{}", ticket);
            return None;
        }
        *displayed = recipes.clone();
        Some(recipes)
    }

    /// The list most recently published by `refresh`
    pub async fn displayed(&self) -> Vec<RecipeCandidate> {
        self.displayed.lock().await.clone()
    }

    /// Full recipe for the detail view. Fallback recipes are served locally.
    pub async fn details(&self, id: i64) -> Result<RecipeCandidate> {
        if let Some(recipe) = fallback_recipes().into_iter().find(|r| r.id == id) {
            return Ok(recipe);
        }
        self.source.details(id).await
    }
}
