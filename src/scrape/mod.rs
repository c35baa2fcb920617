// src/scrape/mod.rs
mod pages;
mod source;

pub use pages::{collect_raw_rows, discover_last_page, RawPages};
pub use source::{HttpPageSource, PageSource};
