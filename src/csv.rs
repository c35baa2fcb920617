// src/csv.rs
use std::io::Write;

use csv::{Terminator, WriterBuilder};

use crate::config::options::{ExportFormat, HeaderPolicy};
use crate::incident::IncidentRow;

pub fn headers(policy: HeaderPolicy) -> &'static [&'static str] {
    match policy {
        HeaderPolicy::Legacy => &IncidentRow::LEGACY_HEADERS,
        HeaderPolicy::Full => &IncidentRow::FULL_HEADERS,
    }
}

/// Write the header row and one eight-field record per incident.
///
/// The writer is flexible: under `HeaderPolicy::Legacy` the header is shorter
/// than the records that follow it.
pub fn write_incidents<W: Write>(
    w: W,
    rows: &[IncidentRow],
    header: HeaderPolicy,
    format: ExportFormat,
) -> csv::Result<()> {
    let mut out = WriterBuilder::new()
        .delimiter(format.delim())
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(w);

    out.write_record(headers(header))?;
    for row in rows {
        out.write_record(row.to_record())?;
    }
    out.flush()?;
    Ok(())
}
