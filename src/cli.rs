// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::consts::{BASE_URL, GEOCODER_URL, GEOCODE_INTERVAL_MS, WORKERS},
    config::options::{AppOptions, ExportFormat, GeocodeTarget, HeaderPolicy},
    error::Result,
    geocode,
    progress::ConsoleProgress,
    runner::{self, Reporters, RunSummary},
    scrape::{HttpPageSource, PageSource},
};

#[derive(Parser, Debug)]
#[command(name = "fire_scrape", version, about = "Scrape CAL FIRE current incidents into a timestamped CSV")]
pub struct Args {
    /// Listing URL; pages are requested as `<url>?page=N`.
    #[arg(long, env = "FIRE_SCRAPE_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Directory for the `fire-list-<stamp>` file.
    #[arg(short, long, env = "FIRE_SCRAPE_OUT_DIR", default_value = ".")]
    pub out_dir: String,

    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Name all eight columns in the header (adds Latitude, Longitude).
    #[arg(long)]
    pub full_header: bool,

    /// Concurrent page fetchers. Geocoding stays sequential.
    #[arg(short, long, default_value_t = WORKERS)]
    pub workers: usize,

    /// Skip coordinate lookup; every row gets 0,0.
    #[arg(long)]
    pub no_geocode: bool,

    #[arg(long, env = "FIRE_SCRAPE_GEOCODER_URL", default_value = GEOCODER_URL)]
    pub geocoder_url: String,

    #[arg(long, value_enum, default_value_t = GeocodeTarget::County)]
    pub geocode_target: GeocodeTarget,

    /// Minimum gap between geocoder requests.
    #[arg(long, default_value_t = GEOCODE_INTERVAL_MS)]
    pub geocode_interval_ms: u64,

    /// Drop rows with an unreadable name or time instead of aborting.
    #[arg(long)]
    pub skip_malformed: bool,

    /// Debug-level logs.
    #[arg(long)]
    pub debug: bool,

    /// Append logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        opts.scrape.base_url = self.base_url.clone();
        opts.scrape.workers = self.workers;
        opts.scrape.skip_malformed = self.skip_malformed;

        opts.geocode.enabled = !self.no_geocode;
        opts.geocode.endpoint = self.geocoder_url.clone();
        opts.geocode.interval_ms = self.geocode_interval_ms;
        opts.geocode.target = self.geocode_target;

        opts.export.set_out_dir(&self.out_dir);
        opts.export.format = self.format;
        opts.export.header = if self.full_header { HeaderPolicy::Full } else { HeaderPolicy::Legacy };
        opts
    }
}

/// Parse the command line and run one scrape.
pub fn run() -> Result<RunSummary> {
    let args = Args::parse();
    crate::log::init(args.debug, args.log_file.as_deref())?;
    run_with(&args.to_options())
}

pub fn run_with(opts: &AppOptions) -> Result<RunSummary> {
    let source = HttpPageSource::new(&opts.scrape.base_url)?;
    let mut geocoder = geocode::from_options(&opts.geocode)?;

    println!("Source: {}\n", source.describe());

    let mut pages = ConsoleProgress::new("Scraping pages...");
    let mut rows = ConsoleProgress::new("Cleaning entries...");
    let summary = runner::run(
        opts,
        &source,
        geocoder.as_mut(),
        Reporters { pages: Some(&mut pages), rows: Some(&mut rows) },
    )?;

    println!("Wrote {} entries to: {}", summary.rows, summary.path.display());
    if summary.skipped_tables + summary.skipped_rows > 0 {
        println!(
            "Skipped {} unreadable tables, dropped {} malformed rows",
            summary.skipped_tables, summary.skipped_rows
        );
    }
    println!("...Done");
    Ok(summary)
}
