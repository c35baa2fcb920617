// src/specs/listing.rs
//
// Listing page: `?page=N`, one `table.incident_table` per fire after a
// leading legend table.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::config::consts::{INCIDENT_TABLE_SELECTOR, LAST_PAGE_SELECTOR};
use crate::core::html::{selector, text_of};
use crate::error::{Error, Result, RowError};
use crate::incident::RawIncidentRow;

static LAST_PAGE: LazyLock<Selector> = LazyLock::new(|| selector(LAST_PAGE_SELECTOR));
static INCIDENT_TABLE: LazyLock<Selector> = LazyLock::new(|| selector(INCIDENT_TABLE_SELECTOR));
static TD: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("DIGITS"));

/// Cell positions inside one incident table. The gaps are label cells.
#[derive(Clone, Copy, Debug)]
pub struct CellLayout {
    pub name: usize,
    pub time: usize,
    pub county: usize,
    pub location: usize,
    pub acres_containment: usize,
}

impl CellLayout {
    pub const CURRENT: CellLayout = CellLayout {
        name: 0,
        time: 1,
        county: 3,
        location: 5,
        acres_containment: 7,
    };

    /// Minimum `<td>` count a table needs for this layout.
    pub fn min_cells(&self) -> usize {
        [self.name, self.time, self.county, self.location, self.acres_containment]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }
}

/// Page index from the "skip to last" pagination link.
pub fn parse_last_page(doc: &str) -> Result<u32> {
    let html = Html::parse_document(doc);
    let link = html.select(&LAST_PAGE).next().ok_or(Error::PaginationMissing)?;
    let href = link.value().attr("href").unwrap_or_default();

    DIGITS
        .find(href)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| Error::PageLink { href: s!(href) })
}

/// One entry per incident table on `page`, legend table excluded.
pub fn parse_incident_tables(doc: &str, page: u32) -> Vec<Result<RawIncidentRow, RowError>> {
    parse_incident_tables_with(doc, page, CellLayout::CURRENT)
}

pub fn parse_incident_tables_with(
    doc: &str,
    page: u32,
    layout: CellLayout,
) -> Vec<Result<RawIncidentRow, RowError>> {
    let html = Html::parse_document(doc);
    let expected = layout.min_cells();

    html.select(&INCIDENT_TABLE)
        .skip(1)
        .enumerate()
        .map(|(i, table)| {
            let cells: Vec<String> = table.select(&TD).map(text_of).collect();
            if cells.len() < expected {
                return Err(RowError::TooFewCells {
                    page,
                    table: i + 1,
                    found: cells.len(),
                    expected,
                });
            }
            Ok(RawIncidentRow {
                name: cells[layout.name].clone(),
                time: cells[layout.time].clone(),
                county: cells[layout.county].clone(),
                location: cells[layout.location].clone(),
                acres_containment: cells[layout.acres_containment].clone(),
            })
        })
        .collect()
}
