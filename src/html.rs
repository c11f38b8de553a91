use html_escape::decode_html_entities;
use scraper::Html;

/// Remove markup from an HTML snippet and collapse the remaining whitespace.
///
/// Text nodes are joined with a single space so `<li>a</li><li>b</li>` reads
/// as `a b`. Plain text passes through with only whitespace normalized.
pub fn strip_html(input: &str) -> String {
    let fragment = Html::parse_fragment(input);
    let text = fragment
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");

    decode_html_entities(&text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
