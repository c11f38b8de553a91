use crate::html::strip_html;
use crate::model::{ProductRecord, ScannedProduct};

/// Category keywords that mark a product as food or drink
pub const EDIBLE_KEYWORDS: &[&str] = &[
    "food",
    "beverage",
    "drink",
    "snack",
    "meal",
    "fruit",
    "vegetable",
    "dairy",
];

const DETAIL_SEPARATOR: &str = " • ";

/// Edibility heuristic: a food-ish category tag, or any ingredient list at all
pub fn is_likely_edible(product: &ProductRecord) -> bool {
    let tagged = product.categories_tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        EDIBLE_KEYWORDS.iter().any(|keyword| tag.contains(keyword))
    });

    tagged || !product.ingredients_text.trim().is_empty()
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Product name, else generic name, else "Barcode {code}"
pub fn display_name(product: &ProductRecord, barcode: &str) -> String {
    non_empty(&product.product_name)
        .or_else(|| non_empty(&product.generic_name))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Barcode {}", barcode))
}

/// First entry of the comma-separated brand list
pub fn primary_brand(product: &ProductRecord) -> String {
    product
        .brands
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Brand, first two categories and ingredient text, joined with " • "
pub fn detail_snippet(product: &ProductRecord) -> String {
    let categories = product
        .categories
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .take(2)
        .collect::<Vec<_>>()
        .join(", ");

    [
        primary_brand(product),
        categories,
        strip_html(&product.ingredients_text),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(DETAIL_SEPARATOR)
}

/// Build the display record for an accepted product
pub fn scanned_product(barcode: &str, product: &ProductRecord) -> ScannedProduct {
    ScannedProduct {
        barcode: barcode.to_string(),
        name: display_name(product, barcode),
        brand: primary_brand(product),
        details: detail_snippet(product),
        is_edible: is_likely_edible(product),
    }
}
