// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;

use crate::config::consts::{FILE_PREFIX, FILE_STAMP};
use crate::config::options::{ExportFormat, ExportOptions};
use crate::error::{Error, Result};
use crate::incident::IncidentRow;

/// `fire-list-10-30-2018-22:18.csv`
pub fn output_file_name(at: NaiveDateTime, format: ExportFormat) -> String {
    let stamp = at.format(FILE_STAMP).to_string();
    join!(FILE_PREFIX, &stamp, ".", format.ext())
}

/// Write every incident to `<out_dir>/fire-list-<stamp>.<ext>`.
/// An existing file with the same name is overwritten.
pub fn write_export(
    export: &ExportOptions,
    rows: &[IncidentRow],
    at: NaiveDateTime,
) -> Result<PathBuf> {
    let dir = export.out_dir();
    ensure_directory(dir)?;

    let path = dir.join(output_file_name(at, export.format));
    let file = File::create(&path).map_err(|source| Error::Io { path: path.clone(), source })?;

    crate::csv::write_incidents(BufWriter::new(file), rows, export.header, export.format)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    let io_err = |source| Error::Io { path: dir.to_path_buf(), source };
    if dir.exists() && !dir.is_dir() {
        return Err(io_err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "path exists but is not a directory",
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(io_err)?; }
    Ok(())
}
