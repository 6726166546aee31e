//! Post-job flow — the simulated save behind the post-job form.

use crate::template::TEMPLATE_SHEET;
use crate::{encode_rows, SheetError};
use chrono::{DateTime, Utc};
use jobboard_core::posting::{FormError, PostJobForm};
use jobboard_core::{JobRecord, COLUMNS};
use thiserror::Error;

pub const POST_CONFIRMATION: &str =
    "Job posted successfully! In a real application, this would be saved to the Excel file.";

#[derive(Debug, Error)]
pub enum PostError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Error posting job. Please try again.")]
    Save(#[from] SheetError),
}

/// A posted job together with the one-row workbook that would have been saved.
#[derive(Debug, Clone)]
pub struct PostedJob {
    pub job: JobRecord,
    pub workbook: Vec<u8>,
}

impl PostedJob {
    pub fn message(&self) -> &'static str {
        POST_CONFIRMATION
    }
}

/// Validate the form, build the record and encode it into a one-row sheet.
pub fn post_job(form: &PostJobForm, now: DateTime<Utc>) -> Result<PostedJob, PostError> {
    let (row, job) = form.submit(now)?;
    let workbook = encode_rows(TEMPLATE_SHEET, &COLUMNS, &[row])?;
    tracing::info!(id = %job.id, bytes = workbook.len(), "job posted (not persisted)");
    tracing::debug!(?job, "posted job");
    Ok(PostedJob { job, workbook })
}
