//! CSV loading for metrics tables.
//!
//! Loads measurement rows from a CSV file with the columns `bitrate_kbps`,
//! `file_size_mb`, `psnr_db`, and `ssim`. Header matching is case-insensitive
//! and accepts a few common aliases, so output from different measurement
//! tools imports without renaming columns.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{self, Measurement};

/// Load measurements from a CSV file, sorted by bitrate ascending.
///
/// Every row must parse: a missing column or an unparseable numeric cell is
/// an error, since a partially loaded table would silently skew the charts
/// and the recommendation.
pub fn load_measurements(path: impl AsRef<Path>) -> Result<Vec<Measurement>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();

    let bitrate_idx = require_column(&header_refs, &["bitrate_kbps", "bitrate", "rate_kbps"])?;
    let size_idx = require_column(&header_refs, &["file_size_mb", "size_mb", "filesize_mb"])?;
    let psnr_idx = require_column(&header_refs, &["psnr_db", "psnr"])?;
    let ssim_idx = require_column(&header_refs, &["ssim", "ssim_avg", "mssim"])?;

    let mut rows = Vec::new();

    for (record_num, record) in reader.records().enumerate() {
        // +2 for 1-based line numbers and the header row
        let line = record_num + 2;
        let record = record.map_err(|e| Error::CsvImport {
            line,
            reason: e.to_string(),
        })?;

        rows.push(Measurement {
            bitrate_kbps: parse_field(&record, bitrate_idx, "bitrate_kbps", line)?,
            file_size_mb: parse_field(&record, size_idx, "file_size_mb", line)?,
            psnr_db: parse_field(&record, psnr_idx, "psnr_db", line)?,
            ssim: parse_field(&record, ssim_idx, "ssim", line)?,
        });
    }

    model::sort_by_bitrate(&mut rows);
    Ok(rows)
}

/// Find a required column by any of its accepted names.
fn require_column(headers: &[&str], names: &[&str]) -> Result<usize> {
    names
        .iter()
        .find_map(|name| find_header_index(headers, name))
        .ok_or_else(|| Error::CsvImport {
            line: 0,
            reason: format!("Could not find required column '{}'", names[0]),
        })
}

/// Find a header index by name (case-insensitive).
fn find_header_index(headers: &[&str], name: &str) -> Option<usize> {
    let name_lower = name.to_lowercase();
    headers.iter().position(|h| h.trim().to_lowercase() == name_lower)
}

fn parse_field(record: &csv::StringRecord, idx: usize, column: &str, line: usize) -> Result<f64> {
    let raw = record.get(idx).unwrap_or("").trim();
    raw.parse().map_err(|_| Error::CsvImport {
        line,
        reason: format!("invalid numeric value '{raw}' in column '{column}'"),
    })
}
