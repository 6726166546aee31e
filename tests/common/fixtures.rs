//! Static rows and clocks used across harnesses.
//!
//! Rows are written as `(column, value)` tables so a harness can build them
//! with [`row_from`](super::row_from) and tweak single cells afterwards.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use jobboard_core::CellValue;

/// The fixed "today" every harness normalises against.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()
}

/// Midnight UTC on [`today`].
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 16, 0, 0, 0).unwrap()
}

/// A fully populated row, the way a well-kept sheet looks.
pub fn complete_row() -> Vec<(&'static str, CellValue)> {
    vec![
        ("id", "101".into()),
        ("title", "Senior Rust Engineer".into()),
        ("company", "Ferrous Systems".into()),
        ("location", "Berlin, Germany".into()),
        ("type", "FULL_TIME".into()),
        ("description", "Build the storage engine.".into()),
        ("requirements", "5+ years Rust\nTokio\n\nDistributed systems".into()),
        ("salaryMin", 90000i64.into()),
        ("salaryMax", "120000".into()),
        ("salaryCurrency", "EUR".into()),
        ("postedDate", "2024-06-13".into()),
        ("applicationUrl", "https://ferrous.example/apply".into()),
        ("companyLogo", "https://ferrous.example/logo.png".into()),
    ]
}

/// Only the identity columns.
pub fn minimal_row() -> Vec<(&'static str, CellValue)> {
    vec![
        ("id", "7".into()),
        ("title", "Barista".into()),
        ("company", "Bean There".into()),
        ("location", "Lisbon".into()),
    ]
}

/// Three postings of different types, in sheet order.
pub fn board_rows() -> Vec<Vec<(&'static str, CellValue)>> {
    vec![
        complete_row(),
        vec![
            ("id", "102".into()),
            ("title", "Part-time Support Agent".into()),
            ("company", "Helpful Co".into()),
            ("location", "Remote".into()),
            ("type", "PART_TIME".into()),
            ("salaryMin", 20000i64.into()),
            ("salaryMax", 25000i64.into()),
            ("salaryCurrency", "USD".into()),
            ("postedDate", "2024-05-01".into()),
        ],
        vec![
            ("id", "103".into()),
            ("title", "Logo Designer".into()),
            ("company", "Pixel Forge".into()),
            ("location", "London, UK".into()),
            ("type", "FREELANCE".into()),
            ("salaryMin", "abc".into()),
            ("salaryMax", (-5i64).into()),
            ("salaryCurrency", "GBP".into()),
            ("postedDate", 45458i64.into()),
        ],
    ]
}

/// `postedDate` cells the normalizer must read, with the expected date.
pub const DATE_CELLS: &[(&str, (i32, u32, u32))] = &[
    ("2024-03-15", (2024, 3, 15)),
    ("2024/03/15", (2024, 3, 15)),
    ("03/15/2024", (2024, 3, 15)),
    ("March 15, 2024", (2024, 3, 15)),
    ("Mar 15, 2024", (2024, 3, 15)),
    ("2024-03-15T09:30:00Z", (2024, 3, 15)),
    ("2024-03-15T23:30:00-05:00", (2024, 3, 16)),
    ("2024-03-15 08:00:00", (2024, 3, 15)),
];

/// `postedDate` cells that cannot be read and fall back to [`today`].
pub const BAD_DATE_CELLS: &[&str] = &["", "not a date", "2024-13-45", "yesterday"];
