use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::html::strip_html;

/// How an inventory item entered the fridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemSource {
    #[default]
    Manual,
    Barcode,
}

/// A single tracked fridge/pantry entry owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub exact_amount: Option<f64>,
    /// Expiration date as MM/DD/YY
    pub expiration: String,
    pub barcode: Option<String>,
    pub details: Option<String>,
    pub brand: Option<String>,
    #[serde(default)]
    pub source: ItemSource,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietaryPreferences {
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
    pub low_calorie: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CuisinePreferences {
    pub mexican: bool,
    pub italian: bool,
    pub indian: bool,
    pub japanese: bool,
    pub chinese: bool,
    pub american: bool,
    pub german: bool,
}

impl CuisinePreferences {
    /// Enabled cuisines by their API name, in declaration order
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            (self.mexican, "mexican"),
            (self.italian, "italian"),
            (self.indian, "indian"),
            (self.japanese, "japanese"),
            (self.chinese, "chinese"),
            (self.american, "american"),
            (self.german, "german"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }

    pub fn any(&self) -> bool {
        !self.enabled().is_empty()
    }
}

/// Per-user dietary and cuisine preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub dietary: DietaryPreferences,
    pub cuisine: CuisinePreferences,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeIngredient {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
}

/// A recipe as returned by the search API or taken from the fallback set.
/// Explicit nulls from the API read as empty or false.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeCandidate {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub image: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub extended_ingredients: Vec<RecipeIngredient>,
    /// HTML or plain text, depending on the source
    pub instructions: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub vegan: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub gluten_free: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub dairy_free: bool,
}

impl RecipeCandidate {
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|url| !url.trim().is_empty())
    }

    /// Instructions with markup removed, ready for a plain text view
    pub fn plain_instructions(&self) -> String {
        self.instructions
            .as_deref()
            .map(strip_html)
            .unwrap_or_default()
    }
}

/// Product metadata from the product database.
/// Every field defaults to empty so business logic never deals with absent keys.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub generic_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub brands: String,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: String,
    #[serde(deserialize_with = "null_as_default")]
    pub categories_tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ingredients_text: String,
}

// The product and recipe APIs send explicit nulls for unknown fields
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A product accepted by the barcode classifier, awaiting an explicit save
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScannedProduct {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub details: String,
    pub is_edible: bool,
}
