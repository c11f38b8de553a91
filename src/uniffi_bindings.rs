//! UniFFI bindings for fridgemate
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;

use crate::barcode::Classification;
use crate::config::AppConfig;
use crate::model::{
    CuisinePreferences, DietaryPreferences, RecipeCandidate, RecipeIngredient, ScannedProduct,
    UserPreferences,
};
use crate::recipes::QuerySpec;
use crate::FridgeError;

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible preference record (flattened dietary and cuisine flags)
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiPreferences {
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
    pub low_calorie: bool,
    pub mexican: bool,
    pub italian: bool,
    pub indian: bool,
    pub japanese: bool,
    pub chinese: bool,
    pub american: bool,
    pub german: bool,
}

impl From<FfiPreferences> for UserPreferences {
    fn from(ffi: FfiPreferences) -> Self {
        UserPreferences {
            dietary: DietaryPreferences {
                vegan: ffi.vegan,
                gluten_free: ffi.gluten_free,
                dairy_free: ffi.dairy_free,
                low_calorie: ffi.low_calorie,
            },
            cuisine: CuisinePreferences {
                mexican: ffi.mexican,
                italian: ffi.italian,
                indian: ffi.indian,
                japanese: ffi.japanese,
                chinese: ffi.chinese,
                american: ffi.american,
                german: ffi.german,
            },
        }
    }
}

/// FFI-compatible recipe ingredient
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: i64,
    pub title: String,
    /// Image URL (empty string if none)
    pub image: String,
    pub ingredients: Vec<FfiIngredient>,
    /// Instructions as received (may contain HTML)
    pub instructions: String,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
}

impl From<RecipeCandidate> for FfiRecipe {
    fn from(recipe: RecipeCandidate) -> Self {
        FfiRecipe {
            id: recipe.id,
            title: recipe.title,
            image: recipe.image.unwrap_or_default(),
            ingredients: recipe
                .extended_ingredients
                .into_iter()
                .map(|i| FfiIngredient {
                    name: i.name,
                    amount: i.amount,
                    unit: i.unit,
                })
                .collect(),
            instructions: recipe.instructions.unwrap_or_default(),
            vegan: recipe.vegan,
            gluten_free: recipe.gluten_free,
            dairy_free: recipe.dairy_free,
        }
    }
}

impl From<FfiRecipe> for RecipeCandidate {
    fn from(ffi: FfiRecipe) -> Self {
        RecipeCandidate {
            id: ffi.id,
            title: ffi.title,
            image: if ffi.image.is_empty() {
                None
            } else {
                Some(ffi.image)
            },
            extended_ingredients: ffi
                .ingredients
                .into_iter()
                .map(|i| RecipeIngredient {
                    name: i.name,
                    amount: i.amount,
                    unit: i.unit,
                })
                .collect(),
            instructions: if ffi.instructions.is_empty() {
                None
            } else {
                Some(ffi.instructions)
            },
            vegan: ffi.vegan,
            gluten_free: ffi.gluten_free,
            dairy_free: ffi.dairy_free,
        }
    }
}

/// Key-value pair for query parameters
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiKeyValue {
    pub key: String,
    pub value: String,
}

/// FFI-compatible recipe query
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiQuerySpec {
    /// "by-ingredients", "by-cuisine" or "generic"
    pub mode: String,
    pub params: Vec<FfiKeyValue>,
}

impl From<QuerySpec> for FfiQuerySpec {
    fn from(spec: QuerySpec) -> Self {
        FfiQuerySpec {
            mode: spec.mode.name().to_string(),
            params: spec
                .query_pairs()
                .into_iter()
                .map(|(key, value)| FfiKeyValue {
                    key: key.to_string(),
                    value,
                })
                .collect(),
        }
    }
}

/// FFI-compatible scanned product
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiScannedProduct {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub details: String,
}

impl From<ScannedProduct> for FfiScannedProduct {
    fn from(product: ScannedProduct) -> Self {
        FfiScannedProduct {
            barcode: product.barcode,
            name: product.name,
            brand: product.brand,
            details: product.details,
        }
    }
}

/// FFI-compatible barcode classification
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiClassification {
    Accepted { product: FfiScannedProduct },
    Rejected { reason: String },
}

impl From<Classification> for FfiClassification {
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::Accepted(product) => FfiClassification::Accepted {
                product: product.into(),
            },
            Classification::Rejected(reason) => FfiClassification::Rejected {
                reason: reason.to_string(),
            },
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiFridgeError {
    /// Input rejected before any network call
    InvalidInput { message: String },
    /// Failed to reach or understand an upstream API
    FetchError { message: String },
    /// Record not found
    NotFound { message: String },
    /// Record store failure
    StorageError { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiFridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiFridgeError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiFridgeError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiFridgeError::NotFound { message } => write!(f, "Not found: {}", message),
            FfiFridgeError::StorageError { message } => write!(f, "Storage error: {}", message),
            FfiFridgeError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiFridgeError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiFridgeError {}

impl From<FridgeError> for FfiFridgeError {
    fn from(err: FridgeError) -> Self {
        match err {
            FridgeError::Validation(message) => FfiFridgeError::InvalidInput { message },
            FridgeError::Fetch(e) => FfiFridgeError::FetchError {
                message: e.to_string(),
            },
            e @ FridgeError::UpstreamStatus(_) => FfiFridgeError::FetchError {
                message: e.to_string(),
            },
            FridgeError::Parse(message) => FfiFridgeError::FetchError { message },
            FridgeError::NotFound(message) => FfiFridgeError::NotFound { message },
            FridgeError::Storage(message) => FfiFridgeError::StorageError { message },
            FridgeError::Config(e) => FfiFridgeError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

/// Overrides for the upstream APIs
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiConfig {
    /// Optional recipe API key (uses config file / environment if not specified)
    pub recipe_api_key: Option<String>,
    pub product_api_base: Option<String>,
    pub recipe_api_base: Option<String>,
    /// Optional timeout in seconds (uses default if not specified)
    pub timeout_seconds: Option<u64>,
}

impl FfiConfig {
    fn resolve(self) -> Result<AppConfig, FfiFridgeError> {
        let mut config = AppConfig::load().map_err(FridgeError::from)?;
        if let Some(key) = self.recipe_api_key {
            config.recipe_api_key = Some(key);
        }
        if let Some(base) = self.product_api_base {
            config.product_api_base = base;
        }
        if let Some(base) = self.recipe_api_base {
            config.recipe_api_base = base;
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout = timeout;
        }
        Ok(config)
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiFridgeError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiFridgeError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Normalize a free-form item name to a singular ingredient term
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize_ingredient(name: String) -> String {
    crate::normalize(&name)
}

/// Decide the recipe search for the given item names and preferences
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn build_recipe_query(
    item_names: Vec<String>,
    preferences: FfiPreferences,
    only_inventory: bool,
) -> FfiQuerySpec {
    crate::recipes::build_for_names(
        item_names.iter().map(String::as_str),
        &preferences.into(),
        only_inventory,
    )
    .into()
}

/// Apply dietary filtering, fallback and image placeholders to raw results
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn process_recipes(recipes: Vec<FfiRecipe>, preferences: FfiPreferences) -> Vec<FfiRecipe> {
    let raw = recipes.into_iter().map(Into::into).collect();
    crate::recipes::process(raw, &preferences.into())
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Search recipes for the given item names. Never returns an empty list.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn suggest_recipes(
    item_names: Vec<String>,
    preferences: FfiPreferences,
    only_inventory: bool,
    config: Option<FfiConfig>,
) -> Result<Vec<FfiRecipe>, FfiFridgeError> {
    let config = config.unwrap_or_default().resolve()?;
    let rt = create_runtime()?;
    rt.block_on(async { suggest_recipes_async(&item_names, preferences.into(), only_inventory, &config).await })
}

async fn suggest_recipes_async(
    item_names: &[String],
    preferences: UserPreferences,
    only_inventory: bool,
    config: &AppConfig,
) -> Result<Vec<FfiRecipe>, FfiFridgeError> {
    let client = crate::SpoonacularClient::new(config)?;
    let session = crate::RecipeSession::new(Box::new(client));
    let spec = crate::recipes::build_for_names(
        item_names.iter().map(String::as_str),
        &preferences,
        only_inventory,
    );
    let recipes = session.suggest_for(&spec, &preferences).await;
    Ok(recipes.into_iter().map(Into::into).collect())
}

/// Validate a scanned code, look it up and decide whether it is food
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn classify_barcode(
    code: String,
    config: Option<FfiConfig>,
) -> Result<FfiClassification, FfiFridgeError> {
    let config = config.unwrap_or_default().resolve()?;
    let rt = create_runtime()?;
    rt.block_on(async {
        let classification = crate::classify_barcode(&config, &code).await?;
        Ok(classification.into())
    })
}

/// Whether a scan payload is a product code worth looking up
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_valid_barcode(code: String) -> bool {
    crate::barcode::is_valid_scan(&code)
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::Rejection;

    #[test]
    fn test_ffi_recipe_conversion() {
        let recipe = RecipeCandidate {
            id: 12,
            title: "Soup".to_string(),
            image: None,
            extended_ingredients: vec![RecipeIngredient {
                name: "leek".to_string(),
                amount: 2.0,
                unit: String::new(),
            }],
            instructions: Some("Simmer.".to_string()),
            vegan: true,
            gluten_free: true,
            dairy_free: false,
        };

        let ffi: FfiRecipe = recipe.clone().into();
        assert_eq!(ffi.image, "");
        assert_eq!(ffi.ingredients.len(), 1);

        let back: RecipeCandidate = ffi.into();
        assert_eq!(back, recipe);
    }

    #[test]
    fn test_preferences_conversion() {
        let prefs: UserPreferences = FfiPreferences {
            vegan: true,
            japanese: true,
            ..Default::default()
        }
        .into();
        assert!(prefs.dietary.vegan);
        assert_eq!(prefs.cuisine.enabled(), vec!["japanese"]);
    }

    #[test]
    fn test_build_recipe_query_ffi() {
        let spec = build_recipe_query(
            vec!["Tomatoes".to_string(), "Onions".to_string()],
            FfiPreferences::default(),
            true,
        );
        assert_eq!(spec.mode, "by-ingredients");
        assert!(spec
            .params
            .iter()
            .any(|kv| kv.key == "includeIngredients" && kv.value == "tomato,onion"));
    }

    #[test]
    fn test_process_recipes_ffi_never_empty() {
        let recipes = process_recipes(Vec::new(), FfiPreferences::default());
        assert_eq!(recipes.len(), 2);
        assert!(recipes.iter().all(|r| !r.image.is_empty()));
    }

    #[test]
    fn test_rejection_conversion() {
        let ffi: FfiClassification = Classification::Rejected(Rejection::NotEdible).into();
        match ffi {
            FfiClassification::Rejected { reason } => assert_eq!(reason, "not an edible item"),
            FfiClassification::Accepted { .. } => panic!("Expected rejection"),
        }
    }

    #[test]
    fn test_error_conversion() {
        let ffi: FfiFridgeError = FridgeError::Validation("empty".to_string()).into();
        assert!(matches!(ffi, FfiFridgeError::InvalidInput { .. }));
    }

    #[test]
    fn test_get_version() {
        assert!(!get_version().is_empty());
    }
}
