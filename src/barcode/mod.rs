//! Barcode scan → product lookup → edibility check → inventory.

pub mod edibility;
mod scanner;
pub mod validate;

pub use edibility::{is_likely_edible, scanned_product, EDIBLE_KEYWORDS};
pub use scanner::{classify, BarcodeScanner, Classification, Rejection, ScanOutcome, ScanState};
pub use validate::{has_uri_scheme, is_product_code, is_valid_scan};
