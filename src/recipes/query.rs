use log::debug;

use crate::model::{InventoryItem, UserPreferences};
use crate::normalizer::normalize;

/// Upper bound on recipes requested per search
pub const RESULT_COUNT: u32 = 20;

/// Search term used when neither inventory nor cuisine narrows the query
pub const GENERIC_QUERY: &str = "easy";

/// How the recipe search is narrowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// Recipes using the given ingredients, pantry staples ignored.
    /// Holds the URL-encoded, comma-joined ingredient list.
    ByIngredients { ingredients: String },
    /// Recipes from the enabled cuisines, comma-joined
    ByCuisine { cuisines: String },
    /// A fixed easy-recipe search
    Generic,
}

impl QueryMode {
    pub fn name(&self) -> &'static str {
        match self {
            QueryMode::ByIngredients { .. } => "by-ingredients",
            QueryMode::ByCuisine { .. } => "by-cuisine",
            QueryMode::Generic => "generic",
        }
    }
}

/// A fully decided recipe search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub mode: QueryMode,
    pub number: u32,
    pub add_recipe_information: bool,
}

impl QuerySpec {
    /// Query parameters, excluding the API key.
    ///
    /// Values are already URL-safe: ingredient names were encoded one by one
    /// and the commas between them are kept literal.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("number", self.number.to_string()),
            ("addRecipeInformation", self.add_recipe_information.to_string()),
        ];

        match &self.mode {
            QueryMode::ByIngredients { ingredients } => {
                pairs.push(("includeIngredients", ingredients.clone()));
                pairs.push(("ignorePantry", "true".to_string()));
            }
            QueryMode::ByCuisine { cuisines } => {
                pairs.push(("cuisine", cuisines.clone()));
            }
            QueryMode::Generic => {
                pairs.push(("query", GENERIC_QUERY.to_string()));
            }
        }

        pairs
    }

    /// Full `complexSearch` URL against the given recipe API base
    pub fn url(&self, base: &str, api_key: &str) -> String {
        let mut url = format!(
            "{}/complexSearch?apiKey={}",
            base.trim_end_matches('/'),
            urlencoding::encode(api_key)
        );
        for (key, value) in self.query_pairs() {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&value);
        }
        url
    }
}

/// Normalize every item name, drop empties, encode each and join with commas
pub fn ingredient_param(items: &[InventoryItem]) -> String {
    encode_ingredients(items.iter().map(|item| item.name.as_str()))
}

pub fn encode_ingredients<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .map(normalize)
        .filter(|name| !name.is_empty())
        .map(|name| urlencoding::encode(&name).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Decide the recipe search for the current inventory and preferences.
///
/// First match wins: inventory-only with usable ingredients, then any enabled
/// cuisine, then the generic query. Dietary flags never change the query;
/// they are applied to the results.
pub fn build(items: &[InventoryItem], prefs: &UserPreferences, only_inventory: bool) -> QuerySpec {
    build_for_names(items.iter().map(|item| item.name.as_str()), prefs, only_inventory)
}

/// Same as [`build`] for callers that only hold item names
pub fn build_for_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
    prefs: &UserPreferences,
    only_inventory: bool,
) -> QuerySpec {
    let ingredients = encode_ingredients(names);
    let cuisines = prefs.cuisine.enabled();

    let mode = if only_inventory && !ingredients.is_empty() {
        QueryMode::ByIngredients { ingredients }
    } else if !cuisines.is_empty() {
        QueryMode::ByCuisine {
            cuisines: cuisines.join(","),
        }
    } else {
        QueryMode::Generic
    };

    debug!("Recipe query mode: {}", mode.name());

    QuerySpec {
        mode,
        number: RESULT_COUNT,
        add_recipe_information: true,
    }
}
