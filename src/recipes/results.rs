use log::{debug, info};

use super::fallback::{fallback_recipes, PLACEHOLDER_IMAGE_URL};
use crate::model::{DietaryPreferences, RecipeCandidate, UserPreferences};

/// True when the recipe satisfies every enabled dietary flag
pub fn satisfies(recipe: &RecipeCandidate, dietary: &DietaryPreferences) -> bool {
    (!dietary.vegan || recipe.vegan)
        && (!dietary.gluten_free || recipe.gluten_free)
        && (!dietary.dairy_free || recipe.dairy_free)
}

fn with_image(mut recipe: RecipeCandidate) -> RecipeCandidate {
    if !recipe.has_image() {
        recipe.image = Some(PLACEHOLDER_IMAGE_URL.to_string());
    }
    recipe
}

/// Filter raw search results by dietary preferences.
///
/// An empty outcome is replaced by the whole fallback set, never merged with
/// real results. Every returned recipe carries an image.
pub fn process(raw: Vec<RecipeCandidate>, prefs: &UserPreferences) -> Vec<RecipeCandidate> {
    let total = raw.len();
    let filtered: Vec<RecipeCandidate> = raw
        .into_iter()
        .filter(|recipe| satisfies(recipe, &prefs.dietary))
        .collect();

    debug!("{} of {} recipes match dietary preferences", filtered.len(), total);

    let recipes = if filtered.is_empty() {
        info!("No usable recipes, showing fallback set");
        fallback_recipes()
    } else {
        filtered
    };

    recipes.into_iter().map(with_image).collect()
}
