//! schema.org `JobPosting` structured data for a job detail view.
//!
//! The block is derived from a [`JobRecord`] only; `validThrough` is one
//! calendar month after the posting date (clamped to the end of shorter
//! months, so `2024-01-31` is valid through `2024-02-29`).

use crate::types::{serialize_amount, JobRecord};
use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::Serialize;

const CONTEXT: &str = "https://schema.org/";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub title: String,
    pub description: String,
    pub date_posted: String,
    pub valid_through: String,
    pub employment_type: String,
    pub hiring_organization: Organization,
    pub job_location: Place,
    pub base_salary: MonetaryAmount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub address: PostalAddress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub address_locality: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonetaryAmount {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub currency: String,
    pub value: QuantitativeValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(serialize_with = "serialize_amount")]
    pub min_value: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub max_value: f64,
    pub unit_text: &'static str,
}

impl JobPosting {
    pub fn from_record(job: &JobRecord) -> Self {
        Self::from_record_at(job, Utc::now())
    }

    /// `now` is only used if `validThrough` cannot be computed.
    pub fn from_record_at(job: &JobRecord, now: DateTime<Utc>) -> Self {
        Self {
            context: CONTEXT,
            kind: "JobPosting",
            title: job.title.clone(),
            description: job.description.clone(),
            date_posted: job.posted_date.format("%Y-%m-%d").to_string(),
            valid_through: valid_through(job.posted_date, now),
            employment_type: job.job_type.as_str().to_string(),
            hiring_organization: Organization {
                kind: "Organization",
                name: job.company.clone(),
                logo: job.company_logo.clone(),
            },
            job_location: Place {
                kind: "Place",
                address: PostalAddress {
                    kind: "PostalAddress",
                    address_locality: job.location.clone(),
                },
            },
            base_salary: MonetaryAmount {
                kind: "MonetaryAmount",
                currency: job.salary.currency.clone(),
                value: QuantitativeValue {
                    kind: "QuantitativeValue",
                    min_value: job.salary.min,
                    max_value: job.salary.max,
                    unit_text: "YEAR",
                },
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The block wrapped in an `application/ld+json` script element.
    ///
    /// `<`, `>` and `&` are written as JSON unicode escapes so no field value
    /// can close the element.
    pub fn to_script_tag(&self) -> serde_json::Result<String> {
        let json = serde_json::to_string(self)?
            .replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026");
        Ok(format!(r#"<script type="application/ld+json">{json}</script>"#))
    }
}

/// Posting date plus one calendar month, as a UTC midnight timestamp.
pub fn valid_through(posted: NaiveDate, now: DateTime<Utc>) -> String {
    match posted.checked_add_months(Months::new(1)) {
        Some(date) => format!("{}T00:00:00.000Z", date.format("%Y-%m-%d")),
        None => {
            tracing::warn!(%posted, "validThrough out of range, falling back to now");
            now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
