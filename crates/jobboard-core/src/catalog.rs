//! Catalog — the in-memory job list built from one batch of rows.
//!
//! Rows are normalised independently; survivors keep their relative order
//! and rejected rows are only counted. A batch where nothing survives is a
//! [`LoadError::NoValidJobs`]. Duplicate ids are not detected; [`JobCatalog::find`]
//! returns the first match.

use crate::normalizer;
use crate::types::{JobRecord, RawRow};
use chrono::{NaiveDate, Utc};
use thiserror::Error;

/// Why a load produced no catalog.
///
/// Fetch and decode failures carry a human-readable message from the layer
/// that failed. Views render all three the same way; only the text differs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("{0}")]
    Fetch(String),
    #[error("{0}")]
    Decode(String),
    #[error("No valid jobs found in the file")]
    NoValidJobs,
}

/// Normalised jobs from a single load, never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobCatalog {
    jobs: Vec<JobRecord>,
    skipped: usize,
}

impl JobCatalog {
    /// Normalise `rows`, using today's UTC date for unusable `postedDate`s.
    pub fn from_rows(rows: Vec<RawRow>) -> Result<Self, LoadError> {
        Self::from_rows_at(rows, Utc::now().date_naive())
    }

    pub fn from_rows_at(rows: Vec<RawRow>, today: NaiveDate) -> Result<Self, LoadError> {
        let total = rows.len();
        let jobs: Vec<JobRecord> = rows
            .iter()
            .enumerate()
            .filter_map(|(index, row)| {
                let job = normalizer::normalize_at(row, today);
                if job.is_none() {
                    tracing::debug!(row = index + 1, "row skipped");
                }
                job
            })
            .collect();

        let skipped = total - jobs.len();
        if jobs.is_empty() {
            tracing::error!(rows = total, "no row survived normalisation");
            return Err(LoadError::NoValidJobs);
        }

        tracing::info!(rows = total, jobs = jobs.len(), skipped, "catalog built");
        Ok(Self { jobs, skipped })
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn into_jobs(self) -> Vec<JobRecord> {
        self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Number of input rows that were dropped.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn find(&self, id: &str) -> Option<&JobRecord> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Case-insensitive substring match over title, company, location and
    /// type. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&JobRecord> {
        let needle = query.trim().to_lowercase();
        self.jobs
            .iter()
            .filter(|job| needle.is_empty() || matches_query(job, &needle))
            .collect()
    }
}

fn matches_query(job: &JobRecord, needle: &str) -> bool {
    [
        job.title.as_str(),
        job.company.as_str(),
        job.location.as_str(),
        job.job_type.as_str(),
    ]
    .iter()
    .any(|haystack| haystack.to_lowercase().contains(needle))
        || crate::display::type_label(&job.job_type)
            .to_lowercase()
            .contains(needle)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
