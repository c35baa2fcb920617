// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub geocode: GeocodeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    /// Page fetchers. 1 keeps the run strictly sequential.
    pub workers: usize,
    /// Drop rows with an unreadable Name/Time instead of aborting.
    pub skip_malformed: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            workers: WORKERS,
            skip_malformed: false,
        }
    }
}

impl ScrapeOptions {
    pub fn workers(&self) -> usize {
        self.workers.clamp(1, MAX_WORKERS)
    }
}

/// Which normalized field is sent to the geocoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum GeocodeTarget {
    #[default]
    County,
    /// Location text, falling back to the county when the location is blank.
    Location,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeocodeOptions {
    pub enabled: bool,
    pub endpoint: String,
    pub target: GeocodeTarget,
    pub interval_ms: u64,
}

impl Default for GeocodeOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: s!(GEOCODER_URL),
            target: GeocodeTarget::County,
            interval_ms: GEOCODE_INTERVAL_MS,
        }
    }
}

impl GeocodeOptions {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

/// Header row written above the data.
///
/// `Legacy` keeps the historical six-column header even though every data
/// row carries eight fields; `Full` names all eight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeaderPolicy {
    #[default]
    Legacy,
    Full,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub header: HeaderPolicy,
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            header: HeaderPolicy::Legacy,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Blank input keeps the current directory.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(s)
        };
    }
}
