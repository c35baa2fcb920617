// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Run-level failures. Anything that reaches the caller as `Error` aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("unreadable JSON from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("pagination control `li.PagedList-skipToLast a[href]` not found on the first listing page")]
    PaginationMissing,

    #[error("no page number in last-page link `{href}`")]
    PageLink { href: String },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// A Name or Time cell that does not look the way the site always renders it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("incident name has no `:` separator: {raw:?}")]
    Name { raw: String },

    #[error("no `<label>: <date>` text in time cell: {raw:?}")]
    Time { raw: String },

    #[error("unrecognised date {text:?}: {reason}")]
    Date { text: String, reason: chrono::ParseError },
}

/// A single incident table that could not be read. The table is skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("incident table {table} on page {page} has {found} cells, expected at least {expected}")]
    TooFewCells {
        page: u32,
        table: usize,
        found: usize,
        expected: usize,
    },
}
