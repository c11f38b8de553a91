//! Ingredient name normalization.
//!
//! Turns free-form inventory names ("Tomatoes!", "  Green   ONIONS 2x") into
//! the lowercase singular terms the recipe search expects.

/// Plural grocery terms and their singular form.
///
/// Keys are compared against the lowercased, trimmed name and against the
/// cleaned name. Values must be clean (`[a-z ]`) and must not be keys.
pub const PLURAL_SINGULARS: &[(&str, &str)] = &[
    ("tomatoes", "tomato"),
    ("potatoes", "potato"),
    ("sweet potatoes", "sweet potato"),
    ("onions", "onion"),
    ("green onions", "green onion"),
    ("carrots", "carrot"),
    ("apples", "apple"),
    ("bananas", "banana"),
    ("oranges", "orange"),
    ("lemons", "lemon"),
    ("limes", "lime"),
    ("grapes", "grape"),
    ("berries", "berry"),
    ("strawberries", "strawberry"),
    ("blueberries", "blueberry"),
    ("raspberries", "raspberry"),
    ("blackberries", "blackberry"),
    ("cherries", "cherry"),
    ("peaches", "peach"),
    ("pears", "pear"),
    ("plums", "plum"),
    ("mangoes", "mango"),
    ("avocados", "avocado"),
    ("peppers", "pepper"),
    ("bell peppers", "bell pepper"),
    ("chilies", "chili"),
    ("jalapenos", "jalapeno"),
    ("cucumbers", "cucumber"),
    ("zucchinis", "zucchini"),
    ("eggplants", "eggplant"),
    ("mushrooms", "mushroom"),
    ("radishes", "radish"),
    ("beets", "beet"),
    ("leeks", "leek"),
    ("shallots", "shallot"),
    ("olives", "olive"),
    ("peas", "pea"),
    ("beans", "bean"),
    ("green beans", "green bean"),
    ("chickpeas", "chickpea"),
    ("lentils", "lentil"),
    ("eggs", "egg"),
    ("sausages", "sausage"),
    ("chicken breasts", "chicken breast"),
    ("chicken thighs", "chicken thigh"),
    ("shrimps", "shrimp"),
    ("anchovies", "anchovy"),
    ("tortillas", "tortilla"),
    ("noodles", "noodle"),
    ("crackers", "cracker"),
    ("cookies", "cookie"),
    ("bagels", "bagel"),
    ("buns", "bun"),
    ("rolls", "roll"),
    ("almonds", "almond"),
    ("walnuts", "walnut"),
    ("peanuts", "peanut"),
    ("cashews", "cashew"),
    ("herbs", "herb"),
    ("cloves", "clove"),
    ("garlic cloves", "garlic"),
    ("yogurts", "yogurt"),
    ("cheeses", "cheese"),
];

fn singular_of(name: &str) -> Option<&'static str> {
    PLURAL_SINGULARS
        .iter()
        .find(|(plural, _)| *plural == name)
        .map(|(_, singular)| *singular)
}

/// Lowercase, keep only `[a-z]` and whitespace, and collapse whitespace runs.
fn clean(name: &str) -> String {
    let lowered: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map a raw item name to a canonical singular ingredient term.
///
/// Never fails; input without any ASCII letter yields an empty string, which
/// callers must skip.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim().to_lowercase();
    if let Some(singular) = singular_of(&trimmed) {
        return singular.to_string();
    }

    let cleaned = clean(&trimmed);
    match singular_of(&cleaned) {
        Some(singular) => singular.to_string(),
        None => cleaned,
    }
}
