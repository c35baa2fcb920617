// src/log.rs
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `debug`.
/// Logs go to stderr, or are appended to `file` without ANSI colours, so
/// stdout only carries the progress lines.
pub fn init(debug: bool, file: Option<&Path>) -> Result<()> {
    let default = if debug { "fire_scrape=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = match file {
        Some(path) => {
            let f = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
            builder.with_writer(Mutex::new(f)).with_ansi(false).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    Ok(())
}
