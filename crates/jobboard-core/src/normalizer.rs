//! Normalizer — turns loosely-typed [`RawRow`] values into [`JobRecord`]s.
//!
//! Normalisation is lenient: only the four identity fields (`id`, `title`,
//! `company`, `location`) can reject a row. Everything else is coerced or
//! defaulted. A rejected row yields `None` and a `warn` log line; it never
//! aborts the batch it came from.

use crate::types::{CellValue, JobRecord, JobType, RawRow, Salary};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};

/// Logo used when the sheet leaves `companyLogo` empty.
pub const PLACEHOLDER_LOGO: &str =
    "https://images.unsplash.com/photo-1560179707-f14e90ef3623?w=100&h=100&fit=crop";
/// Single requirement substituted when the cell is missing or not text.
pub const NO_REQUIREMENTS: &str = "No requirements specified";
pub const DEFAULT_CURRENCY: &str = "USD";
/// Non-functional placeholder link.
pub const DEFAULT_APPLICATION_URL: &str = "#";

const REQUIRED: [&str; 4] = ["id", "title", "company", "location"];

/// Text formats accepted for `postedDate`, tried in order after RFC 3339.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Largest serial a spreadsheet can hold (9999-12-31).
const MAX_SHEET_SERIAL: f64 = 2_958_465.0;

/// Why a row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct Rejection {
    pub missing: Vec<&'static str>,
}

/// Normalise a row, substituting today's UTC date for a bad `postedDate`.
pub fn normalize(row: &RawRow) -> Option<JobRecord> {
    normalize_at(row, Utc::now().date_naive())
}

/// Normalise a row with an explicit substitution date.
pub fn normalize_at(row: &RawRow, today: NaiveDate) -> Option<JobRecord> {
    match try_normalize(row, today) {
        Ok(job) => Some(job),
        Err(rejection) => {
            tracing::warn!(%rejection, ?row, "dropping job row");
            None
        }
    }
}

/// Like [`normalize_at`] but reports the rejection instead of logging it.
pub fn try_normalize(row: &RawRow, today: NaiveDate) -> Result<JobRecord, Rejection> {
    let missing: Vec<&'static str> = REQUIRED
        .into_iter()
        .filter(|key| required_text(row, key).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(Rejection { missing });
    }

    // Presence was checked above; the fallbacks are unreachable.
    let [id, title, company, location] = REQUIRED.map(|key| required_text(row, key).unwrap_or_default());

    let posted_date = match row.get("postedDate").and_then(parse_posted_date) {
        Some(date) => date,
        None => {
            tracing::debug!(id = %id, raw = ?row.get("postedDate"), "postedDate unusable, using today");
            today
        }
    };

    let job_type = JobType::from(text_or(row, "type", JobType::FullTime.as_str()));
    if !job_type.is_known() {
        tracing::warn!(id = %id, job_type = %job_type, "unrecognised job type kept as-is");
    }

    Ok(JobRecord {
        id,
        title,
        company,
        location,
        job_type,
        description: text_or(row, "description", ""),
        requirements: parse_requirements(row.get("requirements")),
        salary: Salary {
            min: coerce_amount(row.get("salaryMin")),
            max: coerce_amount(row.get("salaryMax")),
            currency: text_or(row, "salaryCurrency", DEFAULT_CURRENCY),
        },
        posted_date,
        application_url: text_or(row, "applicationUrl", DEFAULT_APPLICATION_URL),
        company_logo: text_or(row, "companyLogo", PLACEHOLDER_LOGO),
    })
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn required_text(row: &RawRow, key: &str) -> Option<String> {
    row.get(key).map(CellValue::as_text).filter(|s| !s.is_empty())
}

fn text_or(row: &RawRow, key: &str, default: &str) -> String {
    match row.get(key) {
        Some(value) if !value.is_blank() => value.as_text(),
        _ => default.to_string(),
    }
}

/// Split a text cell into one requirement per line, dropping empty lines.
pub fn parse_requirements(value: Option<&CellValue>) -> Vec<String> {
    match value {
        Some(CellValue::Text(text)) => text
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        _ => vec![NO_REQUIREMENTS.to_string()],
    }
}

/// Coerce a salary cell to a non-negative finite number, `0` otherwise.
pub fn coerce_amount(value: Option<&CellValue>) -> f64 {
    let n = match value {
        Some(CellValue::Number(n)) => *n,
        Some(CellValue::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(CellValue::Bool(_)) | None => 0.0,
    };
    if n.is_finite() && n > 0.0 {
        n
    } else {
        0.0
    }
}

/// Best-effort calendar date parse.
///
/// Numbers are read as spreadsheet date serials (day 0 = 1899-12-30). Text
/// is tried as RFC 3339 (converted to the UTC date), then a set of common
/// date and date-time layouts.
pub fn parse_posted_date(value: &CellValue) -> Option<NaiveDate> {
    match value {
        CellValue::Number(serial) => from_sheet_serial(*serial),
        CellValue::Text(text) => parse_date_text(text.trim()),
        CellValue::Bool(_) => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
}

fn from_sheet_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(1.0..=MAX_SHEET_SERIAL).contains(&serial) {
        return None;
    }
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(serial.trunc() as u64))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
