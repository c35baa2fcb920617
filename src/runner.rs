// src/runner.rs
use std::path::PathBuf;

use chrono::Local;
use tracing::{info, warn};

use crate::{
    config::options::{AppOptions, GeocodeTarget},
    error::Result,
    file,
    geocode::Geocoder,
    incident::{IncidentRow, RawIncidentRow},
    normalize::normalize_row,
    progress::Progress,
    scrape::{collect_raw_rows, discover_last_page, PageSource},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub pages: u32,
    pub rows: usize,
    /// Incident tables with too few cells.
    pub skipped_tables: usize,
    /// Rows dropped for an unreadable Name/Time (only with `skip_malformed`).
    pub skipped_rows: usize,
    pub geocode_misses: usize,
    pub path: PathBuf,
}

/// Cleaned rows plus what had to be dropped on the way.
#[derive(Debug, Default)]
pub struct CleanRows {
    pub rows: Vec<IncidentRow>,
    pub dropped: usize,
}

/// Progress sinks for the two long stages. Either may be `None`.
#[derive(Default)]
pub struct Reporters<'a> {
    pub pages: Option<&'a mut dyn Progress>,
    pub rows: Option<&'a mut dyn Progress>,
}

/// Top-level pipeline: discover → extract → normalize → persist.
pub fn run(
    opts: &AppOptions,
    source: &dyn PageSource,
    geocoder: &mut dyn Geocoder,
    reporters: Reporters<'_>,
) -> Result<RunSummary> {
    let last_page = discover_last_page(source)?;
    let raw = collect_raw_rows(source, last_page, opts.scrape.workers(), reporters.pages)?;

    let clean = clean_rows(
        &raw.rows,
        geocoder,
        opts.geocode.target,
        opts.scrape.skip_malformed,
        reporters.rows,
    )?;

    let path = file::write_export(&opts.export, &clean.rows, Local::now().naive_local())?;
    let geocode_misses = clean.rows.iter().filter(|r| r.coordinates.is_none()).count();
    info!(path = %path.display(), rows = clean.rows.len(), geocode_misses, "export written");

    Ok(RunSummary {
        pages: raw.pages,
        rows: clean.rows.len(),
        skipped_tables: raw.skipped.len(),
        skipped_rows: clean.dropped,
        geocode_misses,
        path,
    })
}

/// Normalize every raw row in order. Geocoding happens one row at a time.
///
/// A bad Name/Time aborts unless `skip_malformed`, in which case the row is
/// logged and left out.
pub fn clean_rows(
    raw: &[RawIncidentRow],
    geocoder: &mut dyn Geocoder,
    target: GeocodeTarget,
    skip_malformed: bool,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CleanRows> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(raw.len());
    }

    let mut out = CleanRows { rows: Vec::with_capacity(raw.len()), dropped: 0 };
    let mut failure = None;
    for (i, row) in raw.iter().enumerate() {
        match normalize_row(row, geocoder, target) {
            Ok(clean) => out.rows.push(clean),
            Err(e) if skip_malformed => {
                warn!(error = %e, "dropping malformed incident row");
                out.dropped += 1;
            }
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i as u32);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    match failure {
        Some(e) => Err(e.into()),
        None => Ok(out),
    }
}
