pub mod barcode;
pub mod config;
pub mod error;
pub mod expiry;
pub mod html;
pub mod inventory;
pub mod model;
pub mod normalizer;
pub mod providers;
pub mod recipes;
pub mod store;
pub mod uniffi_bindings;

pub use barcode::{classify, BarcodeScanner, Classification, Rejection, ScanOutcome, ScanState};
pub use config::AppConfig;
pub use error::FridgeError;
pub use inventory::NewItem;
pub use model::{
    CuisinePreferences, DietaryPreferences, InventoryItem, ItemSource, ProductRecord,
    RecipeCandidate, RecipeIngredient, ScannedProduct, UserPreferences,
};
pub use normalizer::normalize;
pub use providers::{OpenFoodFactsClient, ProductLookup, RecipeSource, SpoonacularClient};
pub use recipes::{QueryMode, QuerySpec, RecipeSession};
pub use store::{InventoryStore, MemoryStore, PreferenceStore};

/// Suggest recipes for the given inventory using the configured recipe API.
///
/// Search failures degrade to the fallback recipe set; only a missing API key
/// or an unusable HTTP client is reported as an error.
pub async fn suggest_recipes(
    config: &AppConfig,
    items: &[InventoryItem],
    prefs: &UserPreferences,
    only_inventory: bool,
) -> Result<Vec<RecipeCandidate>, FridgeError> {
    let session = RecipeSession::new(Box::new(SpoonacularClient::new(config)?));
    Ok(session.suggest(items, prefs, only_inventory).await)
}

/// Classify one scanned code against the configured product database
pub async fn classify_barcode(config: &AppConfig, code: &str) -> Result<Classification, FridgeError> {
    let lookup = OpenFoodFactsClient::new(config)?;
    Ok(classify(code, &lookup).await)
}
