//! Upload flow — decode and normalise a user-supplied workbook.
//!
//! The upload is simulated: rows are parsed and logged, a report comes
//! back, and nothing is written anywhere.

use crate::decode_rows;
use chrono::NaiveDate;
use jobboard_core::{normalize_at, JobRecord};
use std::path::Path;
use thiserror::Error;

pub const UPLOAD_CONFIRMATION: &str =
    "Excel file uploaded successfully! In a real application, this would update the jobs database.";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Error reading file")]
    Read(#[source] std::io::Error),
    #[error("Error parsing Excel file. Please check the format.")]
    Parse(#[source] crate::SheetError),
}

/// Outcome of one simulated upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadReport {
    /// Data rows read from the first sheet.
    pub rows: usize,
    pub jobs: Vec<JobRecord>,
    /// Rows the normalizer rejected.
    pub skipped: usize,
}

impl UploadReport {
    pub fn message(&self) -> &'static str {
        UPLOAD_CONFIRMATION
    }
}

/// Parse workbook bytes. A sheet with no valid rows still confirms; the
/// report shows everything was skipped.
pub fn upload_bytes(bytes: &[u8], today: NaiveDate) -> Result<UploadReport, UploadError> {
    let rows = decode_rows(bytes).map_err(UploadError::Parse)?;
    tracing::debug!(rows = ?rows, "parsed upload rows");

    let jobs: Vec<JobRecord> = rows.iter().filter_map(|row| normalize_at(row, today)).collect();
    let report = UploadReport { rows: rows.len(), skipped: rows.len() - jobs.len(), jobs };
    tracing::info!(rows = report.rows, valid = report.jobs.len(), skipped = report.skipped, "upload parsed");
    Ok(report)
}

/// Read `path` and run [`upload_bytes`] on its contents.
pub fn upload_file(path: &Path, today: NaiveDate) -> Result<UploadReport, UploadError> {
    let bytes = std::fs::read(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "upload read failed");
        UploadError::Read(e)
    })?;
    upload_bytes(&bytes, today)
}
