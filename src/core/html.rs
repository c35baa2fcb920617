// src/core/html.rs
use scraper::{ElementRef, Selector};

/// Compile a selector known at compile time. Panics only on a typo in a literal.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e:?}"))
}

/// Every text node under `el`, concatenated as-is (no trimming, entities decoded).
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}
