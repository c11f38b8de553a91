use crate::model::{RecipeCandidate, RecipeIngredient};

/// Image shown for recipes that come without one
pub const PLACEHOLDER_IMAGE_URL: &str = "https://spoonacular.com/recipeImages/placeholder-556x370.jpg";

fn ingredient(name: &str, amount: f64, unit: &str) -> RecipeIngredient {
    RecipeIngredient {
        name: name.to_string(),
        amount,
        unit: unit.to_string(),
    }
}

/// The fixed recipes shown when live search yields nothing usable.
///
/// Returned verbatim; image placeholders are applied by the result processor.
pub fn fallback_recipes() -> Vec<RecipeCandidate> {
    vec![
        RecipeCandidate {
            id: -1,
            title: "Simple Tomato Pasta".to_string(),
            image: Some("https://spoonacular.com/recipeImages/654959-556x370.jpg".to_string()),
            extended_ingredients: vec![
                ingredient("spaghetti", 200.0, "g"),
                ingredient("tomato", 4.0, ""),
                ingredient("garlic", 2.0, "cloves"),
                ingredient("olive oil", 2.0, "tbsp"),
                ingredient("basil", 1.0, "handful"),
            ],
            instructions: Some(
                "Boil the pasta in salted water. Meanwhile soften the garlic in olive oil, \
                 add the chopped tomatoes and simmer for 10 minutes. Toss with the pasta \
                 and finish with basil."
                    .to_string(),
            ),
            vegan: true,
            gluten_free: false,
            dairy_free: true,
        },
        RecipeCandidate {
            id: -2,
            title: "Vegetable Fried Rice".to_string(),
            image: None,
            extended_ingredients: vec![
                ingredient("cooked rice", 2.0, "cups"),
                ingredient("egg", 2.0, ""),
                ingredient("frozen peas and carrots", 1.0, "cup"),
                ingredient("green onion", 2.0, ""),
                ingredient("soy sauce", 2.0, "tbsp"),
            ],
            instructions: Some(
                "Scramble the eggs in a hot pan and set aside. Stir-fry the vegetables, \
                 add the rice and soy sauce, then fold the eggs back in and top with \
                 green onion."
                    .to_string(),
            ),
            vegan: false,
            gluten_free: false,
            dairy_free: true,
        },
    ]
}
