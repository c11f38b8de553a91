use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use log::info;

use crate::barcode::is_product_code;
use crate::error::{FridgeError, Result};
use crate::expiry::format_expiration;
use crate::model::{InventoryItem, ItemSource, ScannedProduct};
use crate::store::InventoryStore;

pub const DEFAULT_UNIT: &str = "pcs";

/// An item about to be added to a user's inventory
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub unit: String,
    pub exact_amount: Option<f64>,
    pub expiration: NaiveDate,
    pub barcode: Option<String>,
    pub details: Option<String>,
    pub brand: Option<String>,
    pub source: ItemSource,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl NewItem {
    /// A manually entered item
    pub fn manual(name: impl Into<String>, expiration: NaiveDate) -> Self {
        NewItem {
            name: name.into(),
            unit: DEFAULT_UNIT.to_string(),
            exact_amount: None,
            expiration,
            barcode: None,
            details: None,
            brand: None,
            source: ItemSource::Manual,
        }
    }

    /// One piece of an accepted scanned product
    pub fn from_scan(product: &ScannedProduct, expiration: NaiveDate) -> Self {
        NewItem {
            name: product.name.clone(),
            unit: DEFAULT_UNIT.to_string(),
            exact_amount: Some(1.0),
            expiration,
            barcode: Some(product.barcode.clone()),
            details: optional(&product.details),
            brand: optional(&product.brand),
            source: ItemSource::Barcode,
        }
    }

    pub fn with_amount(mut self, amount: f64, unit: impl Into<String>) -> Self {
        self.exact_amount = Some(amount);
        self.unit = unit.into();
        self
    }

    /// Reject empty names and barcodes that are not plain product codes
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FridgeError::Validation(
                "item name cannot be empty".to_string(),
            ));
        }

        if let Some(barcode) = &self.barcode {
            if !is_product_code(barcode) {
                return Err(FridgeError::Validation(format!(
                    "'{}' is not a product barcode",
                    barcode
                )));
            }
        }

        Ok(())
    }

    /// Validate and turn into a stored record
    pub fn into_item(self, id: String, created_at: DateTime<Utc>) -> Result<InventoryItem> {
        self.validate()?;

        let unit = match self.unit.trim() {
            "" => DEFAULT_UNIT.to_string(),
            unit => unit.to_string(),
        };

        Ok(InventoryItem {
            id,
            name: self.name.trim().to_string(),
            unit,
            exact_amount: self.exact_amount,
            expiration: format_expiration(self.expiration),
            barcode: self.barcode,
            details: self.details,
            brand: self.brand,
            source: self.source,
            created_at,
        })
    }
}

/// Scan payloads from the dev client or QR links (exp://, http://, https://)
pub fn looks_like_url(value: &str) -> bool {
    value.starts_with("exp://") || value.starts_with("http://") || value.starts_with("https://")
}

/// Drop records whose barcode is a link; they are scanner noise, not groceries
pub fn visible_items(items: Vec<InventoryItem>) -> Vec<InventoryItem> {
    items
        .into_iter()
        .filter(|item| !item.barcode.as_deref().is_some_and(looks_like_url))
        .collect()
}

/// The user's inventory, newest first, without link-shaped records
pub async fn list_items(store: &dyn InventoryStore, user_id: &str) -> Result<Vec<InventoryItem>> {
    Ok(visible_items(store.list(user_id).await?))
}

/// Delete every item whose name equals `name` exactly (after trimming input).
/// Returns how many items were removed.
pub async fn delete_by_name(store: &dyn InventoryStore, user_id: &str, name: &str) -> Result<usize> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FridgeError::Validation(
            "item name cannot be empty".to_string(),
        ));
    }

    let matches: Vec<String> = store
        .list(user_id)
        .await?
        .into_iter()
        .filter(|item| item.name == name)
        .map(|item| item.id)
        .collect();

    if matches.is_empty() {
        return Err(FridgeError::NotFound(format!("no item named \"{}\"", name)));
    }

    for id in &matches {
        store.delete(user_id, id).await?;
    }

    info!("Removed {} item(s) named {:?}", matches.len(), name);
    Ok(matches.len())
}

/// Bulk delete of the selected item ids.
///
/// Every id is checked first; if any is unknown nothing is deleted.
/// Repeated ids count once.
pub async fn delete_selected(store: &dyn InventoryStore, user_id: &str, ids: &[String]) -> Result<usize> {
    let existing: HashSet<String> = store
        .list(user_id)
        .await?
        .into_iter()
        .map(|item| item.id)
        .collect();

    if let Some(missing) = ids.iter().find(|id| !existing.contains(id.as_str())) {
        return Err(FridgeError::NotFound(format!("item {}", missing)));
    }

    let mut selected: Vec<&String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !selected.contains(&id) {
            selected.push(id);
        }
    }

    for id in &selected {
        store.delete(user_id, id).await?;
    }

    info!("Removed {} selected item(s)", selected.len());
    Ok(selected.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn test_manual_item() {
        let item = NewItem::manual("  Milk ", date())
            .into_item("a".to_string(), Utc::now())
            .unwrap();
        assert_eq!(item.name, "Milk");
        assert_eq!(item.unit, "pcs");
        assert_eq!(item.expiration, "03/09/25");
        assert_eq!(item.source, ItemSource::Manual);
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = NewItem::manual("   ", date()).validate();
        assert!(matches!(result, Err(FridgeError::Validation(_))));
    }

    #[test]
    fn test_url_barcode_rejected() {
        let mut item = NewItem::manual("Link", date());
        item.barcode = Some("exp://192.168.0.2:8081".to_string());
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_from_scan() {
        let product = ScannedProduct {
            barcode: "5000112637922".to_string(),
            name: "Coca-Cola".to_string(),
            brand: String::new(),
            details: "Beverages".to_string(),
            is_edible: true,
        };
        let item = NewItem::from_scan(&product, date());
        assert_eq!(item.exact_amount, Some(1.0));
        assert_eq!(item.brand, None);
        assert_eq!(item.details.as_deref(), Some("Beverages"));
        assert_eq!(item.source, ItemSource::Barcode);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_with_amount() {
        let item = NewItem::manual("Flour", date()).with_amount(500.0, "g");
        assert_eq!(item.exact_amount, Some(500.0));
        assert_eq!(item.unit, "g");
    }

    #[test]
    fn test_visible_items_drop_links() {
        let mut linked = NewItem::manual("Link", date())
            .into_item("1".to_string(), Utc::now())
            .unwrap();
        linked.barcode = Some("https://example.com".to_string());
        let kept = NewItem::manual("Cheese", date())
            .into_item("2".to_string(), Utc::now())
            .unwrap();

        let visible = visible_items(vec![linked, kept]);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Cheese");
    }

    #[test]
    fn test_looks_like_url() {
        assert!(looks_like_url("exp://host"));
        assert!(looks_like_url("https://host"));
        assert!(!looks_like_url("12345678"));
    }
}
