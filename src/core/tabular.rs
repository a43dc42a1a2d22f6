//! CSV file ingestion
//!
//! The first row is the header row; subsequent rows map header to value.
//! Values are trimmed, fully-empty rows are skipped, and ragged rows are
//! tolerated: short rows yield only the columns they have values for,
//! extra trailing fields are dropped.

use crate::utils::error::{AppError, AppResult};
use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;
use std::path::Path;

/// A parsed CSV row keyed by column name
pub type Row = HashMap<String, String>;

/// Read a CSV file into a list of header-keyed rows.
pub fn read_csv(path: &Path) -> AppResult<Vec<Row>> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| AppError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| AppError::InvalidInput(format!("Failed to read CSV header row: {}", e)))?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record =
            result.map_err(|e| AppError::InvalidInput(format!("Failed to parse CSV row: {}", e)))?;

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let mut row = Row::with_capacity(headers.len());
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), field.to_string());
        }
        rows.push(row);
    }

    Ok(rows)
}
