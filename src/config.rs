use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_PRODUCT_API_BASE: &str = "https://world.openfoodfacts.org/api/v0/product";
pub const DEFAULT_RECIPE_API_BASE: &str = "https://api.spoonacular.com/recipes";

/// Application configuration for the upstream APIs and reminders
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the product database (`{base}/{barcode}.json`)
    #[serde(default = "default_product_api_base")]
    pub product_api_base: String,
    /// Base URL of the recipe search API
    #[serde(default = "default_recipe_api_base")]
    pub recipe_api_base: String,
    /// API key for the recipe search API (can also be set via SPOONACULAR_API_KEY)
    pub recipe_api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// How many days ahead an item counts as "expiring soon"
    #[serde(default = "default_reminder_window_days")]
    pub reminder_window_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            product_api_base: default_product_api_base(),
            recipe_api_base: default_recipe_api_base(),
            recipe_api_key: None,
            timeout: default_timeout(),
            reminder_window_days: default_reminder_window_days(),
        }
    }
}

// Default value functions
fn default_product_api_base() -> String {
    DEFAULT_PRODUCT_API_BASE.to_string()
}

fn default_recipe_api_base() -> String {
    DEFAULT_RECIPE_API_BASE.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_reminder_window_days() -> u32 {
    3
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FRIDGEMATE__ prefix
    /// 2. fridgemate.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FRIDGEMATE__RECIPE_API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Recipe API key from config, then from the SPOONACULAR_API_KEY variable
    pub fn recipe_api_key(&self) -> Option<String> {
        self.recipe_api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("fridgemate").required(false))
        // Use double underscore for nested: FRIDGEMATE__RECIPE_API_KEY
        .add_source(
            Environment::with_prefix("FRIDGEMATE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
