//! Post-job form — collects a single posting and turns it into a sheet row.
//!
//! Nothing is persisted. The form is validated, converted to a [`RawRow`]
//! with the canonical column names, and run through the normalizer so the
//! caller gets the same [`JobRecord`] a sheet load would produce.

use crate::normalizer::{self, DEFAULT_APPLICATION_URL, PLACEHOLDER_LOGO};
use crate::types::{JobRecord, JobType, RawRow};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Currencies offered by the form.
pub const CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("generated row was rejected: {0}")]
    Rejected(#[from] normalizer::Rejection),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostJobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub description: String,
    /// One requirement per line.
    pub requirements: String,
    pub salary_min: String,
    pub salary_max: String,
    pub currency: String,
    /// Optional; the placeholder logo is used when blank.
    pub company_logo: String,
}

impl Default for PostJobForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            job_type: JobType::FullTime,
            description: String::new(),
            requirements: String::new(),
            salary_min: String::new(),
            salary_max: String::new(),
            currency: CURRENCIES[0].to_string(),
            company_logo: String::new(),
        }
    }
}

impl PostJobForm {
    /// Every field except the logo must be filled in, and both salary fields
    /// must be numbers.
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
            ("description", &self.description),
            ("requirements", &self.requirements),
            ("salaryMin", &self.salary_min),
            ("salaryMax", &self.salary_max),
            ("currency", &self.currency),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(FormError::MissingField(*field));
        }
        for (field, value) in [("salaryMin", &self.salary_min), ("salaryMax", &self.salary_max)] {
            if value.trim().parse::<f64>().is_err() {
                return Err(FormError::InvalidNumber { field, value: value.clone() });
            }
        }
        Ok(())
    }

    /// Requirement lines with whitespace-only lines removed.
    pub fn requirement_lines(&self) -> Vec<&str> {
        self.requirements
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect()
    }

    /// Build the sheet row for this posting. The id is the submission time
    /// in Unix milliseconds.
    pub fn to_row(&self, now: DateTime<Utc>) -> RawRow {
        let logo = if self.company_logo.trim().is_empty() {
            PLACEHOLDER_LOGO
        } else {
            self.company_logo.as_str()
        };
        RawRow::new()
            .with("id", now.timestamp_millis().to_string())
            .with("title", self.title.as_str())
            .with("company", self.company.as_str())
            .with("location", self.location.as_str())
            .with("type", self.job_type.as_str())
            .with("description", self.description.as_str())
            .with("requirements", self.requirement_lines().join("\n"))
            .with("salaryMin", self.salary_min.trim())
            .with("salaryMax", self.salary_max.trim())
            .with("salaryCurrency", self.currency.as_str())
            .with("postedDate", now.format("%Y-%m-%d").to_string())
            .with("applicationUrl", DEFAULT_APPLICATION_URL)
            .with("companyLogo", logo)
    }

    /// Validate, build the row and normalise it.
    pub fn submit(&self, now: DateTime<Utc>) -> Result<(RawRow, JobRecord), FormError> {
        self.validate()?;
        let row = self.to_row(now);
        let job = normalizer::try_normalize(&row, now.date_naive())?;
        tracing::info!(id = %job.id, title = %job.title, "job posting prepared");
        Ok((row, job))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
