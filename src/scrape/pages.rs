// src/scrape/pages.rs
use std::{
    thread,
    time::Duration,
    sync::{mpsc, atomic::{AtomicBool, AtomicUsize, Ordering}},
};

use tracing::{debug, info, warn};

use crate::{
    config::consts::REQUEST_PAUSE_MS,
    error::{Error, Result, RowError},
    incident::RawIncidentRow,
    progress::Progress,
    specs::listing,
};

use super::PageSource;

type PageTables = Vec<Result<RawIncidentRow, RowError>>;

/// Raw rows of every listing page, in page order.
#[derive(Debug, Default)]
pub struct RawPages {
    pub pages: u32,
    pub rows: Vec<RawIncidentRow>,
    /// Incident tables that could not be read.
    pub skipped: Vec<RowError>,
}

/// Fetch page 1 and read the last page index from its pagination control.
pub fn discover_last_page(source: &dyn PageSource) -> Result<u32> {
    let doc = source.fetch_page(1)?;
    let last = listing::parse_last_page(&doc)?;
    info!(last_page = last, "pagination discovered");
    Ok(last)
}

/// Scrape pages `1..=last_page`.
///
/// With `workers > 1` pages are fetched concurrently; rows still come back in
/// page order. The first failed page aborts the whole collection.
pub fn collect_raw_rows(
    source: &dyn PageSource,
    last_page: u32,
    workers: usize,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RawPages> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(last_page as usize);
    }

    let mut done = |page: u32| {
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(page);
        }
    };

    let fetched = if workers <= 1 || last_page <= 1 {
        fetch_sequential(source, last_page, &mut done)
    } else {
        fetch_parallel(source, last_page, workers, &mut done)
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    let per_page = fetched?;

    let mut out = RawPages { pages: last_page, ..RawPages::default() };
    for (_, tables) in per_page {
        for table in tables {
            match table {
                Ok(row) => out.rows.push(row),
                Err(e) => {
                    warn!(error = %e, "skipping incident table");
                    out.skipped.push(e);
                }
            }
        }
    }
    info!(rows = out.rows.len(), skipped = out.skipped.len(), "listing scraped");
    Ok(out)
}

fn fetch_tables(source: &dyn PageSource, page: u32) -> Result<PageTables> {
    let doc = source.fetch_page(page)?;
    let tables = listing::parse_incident_tables(&doc, page);
    debug!(page, tables = tables.len(), "page parsed");
    Ok(tables)
}

fn fetch_sequential(
    source: &dyn PageSource,
    last_page: u32,
    done: &mut dyn FnMut(u32),
) -> Result<Vec<(u32, PageTables)>> {
    let mut out = Vec::with_capacity(last_page as usize);
    for page in 1..=last_page {
        out.push((page, fetch_tables(source, page)?));
        done(page);
    }
    Ok(out)
}

fn fetch_parallel(
    source: &dyn PageSource,
    last_page: u32,
    workers: usize,
    done: &mut dyn FnMut(u32),
) -> Result<Vec<(u32, PageTables)>> {
    let pages: Vec<u32> = (1..=last_page).collect();
    let next = AtomicUsize::new(0);
    let abort = AtomicBool::new(false);
    let (res_tx, res_rx) = mpsc::channel::<(u32, Result<PageTables>)>();

    let workers = workers.min(pages.len()).max(1);

    thread::scope(|scope| {
        // Spawn workers
        for _ in 0..workers {
            let tx = res_tx.clone();
            let (pages, next, abort) = (&pages, &next, &abort);

            scope.spawn(move || loop {
                if abort.load(Ordering::Relaxed) {
                    break;
                }
                let i = next.fetch_add(1, Ordering::Relaxed);
                let Some(&page) = pages.get(i) else { break };

                let result = fetch_tables(source, page);
                let failed = result.is_err();
                if tx.send((page, result)).is_err() || failed {
                    break;
                }
                thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
            });
        }
        drop(res_tx); // main thread is sole receiver now

        // Aggregate results
        let mut per_page = Vec::with_capacity(pages.len());
        let mut first_err: Option<Error> = None;
        for (page, result) in res_rx {
            match result {
                Ok(tables) => {
                    done(page);
                    per_page.push((page, tables));
                }
                Err(e) => {
                    warn!(page, error = %e, "page fetch failed");
                    abort.store(true, Ordering::Relaxed);
                    first_err.get_or_insert(e);
                }
            }
        }

        match first_err {
            Some(e) => Err(e),
            None => {
                per_page.sort_by_key(|(page, _)| *page);
                Ok(per_page)
            }
        }
    })
}
