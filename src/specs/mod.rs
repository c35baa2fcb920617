// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications for the incident listing site.
//! Each module here encodes *where the data lives in the HTML* for one page shape
//! and how to pull it out.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched documents (no network).
//! - **Selector choice** (`li.PagedList-skipToLast`, `table.incident_table`)
//!   and the **cell layout** of an incident table.
//! - Shaping into [`RawIncidentRow`](crate::incident::RawIncidentRow); no cleanup
//!   of the cell text beyond what the DOM gives us.
//!
//! ## What does **not** live here
//! - Fetching, pagination traversal, worker threads (`scrape`).
//! - Field cleanup and geocoding (`normalize`, `geocode`).
//! - Export (`csv`, `file`).
//!
//! ## Conventions & invariants
//! - A structural problem in one incident table is a [`RowError`](crate::error::RowError)
//!   for that table only; the rest of the page is still returned.
//! - A missing pagination control is fatal: without it the page count is unknown.
//! - Parsers are testable **offline** against inline fixtures.
pub mod listing;
