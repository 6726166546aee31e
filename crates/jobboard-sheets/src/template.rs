//! Template export — a one-row workbook showing the expected column layout.

use crate::{encode_rows, SheetError};
use chrono::NaiveDate;
use jobboard_core::{RawRow, COLUMNS};
use std::path::Path;

/// Sheet name used for templates and simulated saves.
pub const TEMPLATE_SHEET: &str = "Jobs";

/// Message shown when the template cannot be produced.
pub const TEMPLATE_FAILED: &str = "Failed to generate template file";

/// The sample row, dated `today`.
pub fn template_row(today: NaiveDate) -> RawRow {
    RawRow::new()
        .with("id", "1")
        .with("title", "Sample Job Title")
        .with("company", "Sample Company")
        .with("location", "City, Country")
        .with("type", "FULL_TIME")
        .with("description", "Job description goes here...")
        .with("requirements", "Requirement 1\nRequirement 2\nRequirement 3")
        .with("salaryMin", "50000")
        .with("salaryMax", "100000")
        .with("salaryCurrency", "USD")
        .with("postedDate", today.format("%Y-%m-%d").to_string())
        .with("applicationUrl", "https://example.com/apply")
        .with("companyLogo", "https://example.com/logo.png")
}

/// Encode the template workbook.
pub fn template_bytes(today: NaiveDate) -> Result<Vec<u8>, SheetError> {
    encode_rows(TEMPLATE_SHEET, &COLUMNS, &[template_row(today)])
}

/// Write the template workbook to `path`.
pub fn write_template(path: &Path, today: NaiveDate) -> Result<(), SheetError> {
    let bytes = template_bytes(today)?;
    std::fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "template written");
    Ok(())
}
