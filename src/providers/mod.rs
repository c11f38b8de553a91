mod open_food_facts;
mod spoonacular;

pub use open_food_facts::OpenFoodFactsClient;
pub use spoonacular::SpoonacularClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{ProductRecord, RecipeCandidate};
use crate::recipes::QuerySpec;

const USER_AGENT: &str = concat!("FridgeMate/", env!("CARGO_PKG_VERSION"));

/// Product database keyed by barcode
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Get the provider name (e.g., "openfoodfacts")
    fn provider_name(&self) -> &str;

    /// Fetch product metadata. `Ok(None)` means the database has no product
    /// for this code; transport and payload failures are errors.
    async fn lookup(&self, barcode: &str) -> Result<Option<ProductRecord>>;
}

/// Recipe search service
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the provider name (e.g., "spoonacular")
    fn provider_name(&self) -> &str;

    /// Run a search and return the raw, unfiltered candidates
    async fn search(&self, query: &QuerySpec) -> Result<Vec<RecipeCandidate>>;

    /// Fetch one recipe with full instructions
    async fn details(&self, id: i64) -> Result<RecipeCandidate>;
}
