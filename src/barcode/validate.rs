use regex::Regex;
use std::sync::LazyLock;

static PRODUCT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8,14}$").expect("valid product code pattern"));

// exp://..., https://..., mailto:..., etc.
static URI_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("valid scheme pattern"));

/// True for scan payloads that are links rather than product codes
pub fn has_uri_scheme(payload: &str) -> bool {
    payload.contains("://") || URI_SCHEME.is_match(payload)
}

/// EAN-8 through GTIN-14: 8 to 14 ASCII digits, nothing else
pub fn is_product_code(payload: &str) -> bool {
    PRODUCT_CODE.is_match(payload)
}

/// Whether a scan payload may be sent to the product database
pub fn is_valid_scan(payload: &str) -> bool {
    !has_uri_scheme(payload) && is_product_code(payload)
}
