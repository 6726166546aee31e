//! Core types for jobboard-core.
//!
//! This module defines the data shapes shared by every layer: the untyped
//! [`RawRow`] produced by spreadsheet decoding, its [`CellValue`] scalars,
//! and the canonical [`JobRecord`] the normalizer builds from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Column names of the job sheet, in template order. Header matching is
/// case-sensitive.
pub const COLUMNS: [&str; 13] = [
    "id",
    "title",
    "company",
    "location",
    "type",
    "description",
    "requirements",
    "salaryMin",
    "salaryMax",
    "salaryCurrency",
    "postedDate",
    "applicationUrl",
    "companyLogo",
];

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// One untyped spreadsheet cell.
///
/// Absent cells are represented by the key being missing from the
/// [`RawRow`], not by a variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Loose string coercion: whole numbers print without a fractional part,
    /// booleans print as `true` / `false`.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// An empty text cell. Decoders emit these for blank cells inside the
    /// header range, and they count as "absent" for defaulting.
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.is_empty())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// A loosely-typed input row keyed by column header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: BTreeMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<CellValue> {
        self.cells.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

// ---------------------------------------------------------------------------
// Canonical record
// ---------------------------------------------------------------------------

/// Employment type of a posting.
///
/// Sheets are free-form, so anything outside the four known values is kept
/// verbatim in [`JobType::Other`] instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Other(String),
}

impl JobType {
    /// The four values offered by the post-job form.
    pub const KNOWN: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Freelance,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            JobType::FullTime => "FULL_TIME",
            JobType::PartTime => "PART_TIME",
            JobType::Contract => "CONTRACT",
            JobType::Freelance => "FREELANCE",
            JobType::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, JobType::Other(_))
    }
}

impl From<String> for JobType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "FULL_TIME" => JobType::FullTime,
            "PART_TIME" => JobType::PartTime,
            "CONTRACT" => JobType::Contract,
            "FREELANCE" => JobType::Freelance,
            _ => JobType::Other(s),
        }
    }
}

impl From<&str> for JobType {
    fn from(s: &str) -> Self {
        JobType::from(s.to_string())
    }
}

impl From<JobType> for String {
    fn from(t: JobType) -> Self {
        match t {
            JobType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Salary band. No ordering is enforced between `min` and `max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    #[serde(serialize_with = "serialize_amount")]
    pub min: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub max: f64,
    pub currency: String,
}

/// A normalised job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub description: String,
    pub requirements: Vec<String>,
    pub salary: Salary,
    /// Serialised as `YYYY-MM-DD`.
    pub posted_date: NaiveDate,
    pub application_url: String,
    pub company_logo: String,
}

/// Whole amounts serialise as integers (`50000`, not `50000.0`).
pub(crate) fn serialize_amount<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        s.serialize_i64(*value as i64)
    } else {
        s.serialize_f64(*value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
