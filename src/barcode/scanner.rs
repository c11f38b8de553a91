use std::fmt;

use chrono::NaiveDate;
use log::{debug, info, warn};

use super::edibility::{is_likely_edible, scanned_product};
use super::validate::is_valid_scan;
use crate::error::{FridgeError, Result};
use crate::inventory::NewItem;
use crate::model::{InventoryItem, ScannedProduct};
use crate::providers::ProductLookup;
use crate::store::InventoryStore;

/// Why a scan did not produce an inventory candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotAProductCode,
    NoProductDetails,
    NotEdible,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotAProductCode => write!(f, "not a product code"),
            Rejection::NoProductDetails => write!(f, "no product details found"),
            Rejection::NotEdible => write!(f, "not an edible item"),
        }
    }
}

/// Terminal result of classifying one scan
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Accepted(ScannedProduct),
    Rejected(Rejection),
}

impl Classification {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Classification::Accepted(_))
    }
}

/// Validate a scan payload, look the product up and decide whether it is food.
///
/// Lookup failures of any kind reject the scan; nothing here returns an error.
pub async fn classify(code: &str, lookup: &dyn ProductLookup) -> Classification {
    run_classification(code, lookup, |_| {}).await
}

/// The validate → look up → classify chain. `enter` is told about each
/// intermediate stage before it runs.
async fn run_classification(
    code: &str,
    lookup: &dyn ProductLookup,
    mut enter: impl FnMut(ScanState),
) -> Classification {
    enter(ScanState::Validating);
    if !is_valid_scan(code) {
        debug!("Rejecting scan payload {:?}: not a product code", code);
        return Classification::Rejected(Rejection::NotAProductCode);
    }

    enter(ScanState::LookingUp);
    let product = match lookup.lookup(code).await {
        Ok(Some(product)) => product,
        Ok(None) => return Classification::Rejected(Rejection::NoProductDetails),
        Err(e) => {
            warn!(
                "Product lookup for {} via {} failed: {}",
                code,
                lookup.provider_name(),
                e
            );
            return Classification::Rejected(Rejection::NoProductDetails);
        }
    };

    enter(ScanState::Classifying);
    if !is_likely_edible(&product) {
        return Classification::Rejected(Rejection::NotEdible);
    }

    Classification::Accepted(scanned_product(code, &product))
}

/// Where the scanner is in handling the current scan event
#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    Idle,
    Validating,
    LookingUp,
    Classifying,
    Accepted(ScannedProduct),
    Rejected(Rejection),
}

/// What happened to a scan event handed to the scanner
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// A scan is already being handled or awaits save/reset
    Ignored,
    Accepted(ScannedProduct),
    Rejected(Rejection),
}

/// Per-screen scan session.
///
/// At most one scan is classified at a time. The busy flag is raised when a
/// scan is received and cleared by a terminal rejection, `reset()` or a
/// successful `save()`; an accepted product keeps the scanner busy until the
/// user saves it or scans again.
pub struct BarcodeScanner {
    lookup: Box<dyn ProductLookup>,
    state: ScanState,
    busy: bool,
}

impl BarcodeScanner {
    pub fn new(lookup: Box<dyn ProductLookup>) -> Self {
        BarcodeScanner {
            lookup,
            state: ScanState::Idle,
            busy: false,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The accepted product waiting to be saved, if any
    pub fn pending(&self) -> Option<&ScannedProduct> {
        match &self.state {
            ScanState::Accepted(product) => Some(product),
            _ => None,
        }
    }

    fn transition(&mut self, next: ScanState) {
        debug!("Scanner: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Handle one scan event from the camera
    pub async fn on_scan(&mut self, code: &str) -> ScanOutcome {
        if self.busy {
            debug!("Scanner busy, ignoring {:?}", code);
            return ScanOutcome::Ignored;
        }
        self.busy = true;

        let BarcodeScanner { lookup, state, .. } = self;
        let classification = run_classification(code, lookup.as_ref(), |next| {
            debug!("Scanner: {:?} -> {:?}", state, next);
            *state = next;
        })
        .await;

        match classification {
            Classification::Accepted(scanned) => {
                info!("Accepted scan {} ({})", scanned.barcode, scanned.name);
                self.transition(ScanState::Accepted(scanned.clone()));
                ScanOutcome::Accepted(scanned)
            }
            Classification::Rejected(reason) => self.reject(reason),
        }
    }

    fn reject(&mut self, reason: Rejection) -> ScanOutcome {
        self.transition(ScanState::Rejected(reason));
        self.busy = false;
        ScanOutcome::Rejected(reason)
    }

    /// "Scan again": drop any pending product and accept new scans
    pub fn reset(&mut self) {
        self.transition(ScanState::Idle);
        self.busy = false;
    }

    /// Persist the pending product for `user_id` and re-arm the scanner.
    ///
    /// On a store failure the product stays pending so the user can retry.
    pub async fn save(
        &mut self,
        user_id: &str,
        expiration: NaiveDate,
        store: &dyn InventoryStore,
    ) -> Result<InventoryItem> {
        let product = self
            .pending()
            .cloned()
            .ok_or_else(|| FridgeError::Validation("no scanned product to save".to_string()))?;

        let item = store
            .create(user_id, NewItem::from_scan(&product, expiration))
            .await?;

        info!("Saved {} to inventory of {}", item.name, user_id);
        self.reset();
        Ok(item)
    }
}
