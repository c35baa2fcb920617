// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.fire.ca.gov/current_incidents/";
pub const PAGE_PARAM: &str = "page";
pub const USER_AGENT: &str = concat!("fire_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Geocoding
pub const GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const GEOCODER_USER_AGENT: &str = "fire_scraper";
pub const GEOCODE_INTERVAL_MS: u64 = 1_000; // public Nominatim: max 1 req/s

// Listing markup
pub const LAST_PAGE_SELECTOR: &str = "li.PagedList-skipToLast a[href]";
pub const INCIDENT_TABLE_SELECTOR: &str = "table.incident_table";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const FILE_PREFIX: &str = "fire-list-";
pub const FILE_STAMP: &str = "%m-%d-%Y-%H:%M";
pub const TIME_FORMAT: &str = "%m/%d/%Y %H:%M";
pub const PLACEHOLDER: &str = " ";

// Concurrency
pub const WORKERS: usize = 1;
pub const MAX_WORKERS: usize = 8;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
