#![allow(unused)]
//! Normalizer integration harness.
//!
//! # What this covers
//!
//! - **Required fields**: rows missing or blanking any of `id`, `title`,
//!   `company`, `location` yield no record, and the rejection names them.
//! - **Dates**: every accepted `postedDate` layout, spreadsheet serials, and
//!   the substitution of "today" for unreadable cells.
//! - **Requirements**: line splitting, empty-line removal, and the
//!   placeholder for missing or non-text cells.
//! - **Salaries and defaults**: coercion to non-negative numbers and the
//!   per-field defaults for blank optional cells.
//! - **Properties** (proptest): any row with the four identity fields
//!   normalises, and every record satisfies the record invariants.
//! - **Insta snapshot** of a fully populated row.
//!
//! # Running
//!
//! ```sh
//! cargo test --test normalization_harness
//! # Update snapshots after intentional changes:
//! cargo insta review
//! ```

mod common;
use common::*;

use chrono::NaiveDate;
use jobboard_core::normalizer::{try_normalize, NO_REQUIREMENTS, PLACEHOLDER_LOGO};
use jobboard_core::{normalize_at, CellValue, JobType, RawRow};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn normalized(row: &RawRow) -> jobboard_core::JobRecord {
    try_normalize(row, today()).expect("row should normalise")
}

// ---------------------------------------------------------------------------
// Required fields
// ---------------------------------------------------------------------------

#[rstest]
#[case::id("id")]
#[case::title("title")]
#[case::company("company")]
#[case::location("location")]
fn missing_required_field_rejects_row(#[case] field: &'static str) {
    let row = RawRowBuilder::from_pairs(complete_row()).without(field).build();
    assert_rejected!(row, today(), [field]);
    assert!(normalize_at(&row, today()).is_none());
}

#[rstest]
#[case::id("id")]
#[case::title("title")]
#[case::company("company")]
#[case::location("location")]
fn blank_required_field_rejects_row(#[case] field: &'static str) {
    let row = RawRowBuilder::from_pairs(complete_row()).blank(field).build();
    assert_rejected!(row, today(), [field]);
}

#[test]
fn rejection_lists_fields_in_column_order() {
    let row = RawRowBuilder::new().cell("title", "Only a title").build();
    assert_rejected!(row, today(), ["id", "company", "location"]);
}

#[test]
fn numeric_identity_cells_are_coerced_to_text() {
    let row = RawRowBuilder::identity("x", "Chef", "Bistro", "Paris")
        .cell("id", 42i64)
        .build();
    assert_job_fields!(normalized(&row), id: "42");
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

#[test]
fn well_formed_date_is_kept() {
    let job = normalized(&row_from(complete_row()));
    assert_eq!(job.posted_date, NaiveDate::from_ymd_opt(2024, 6, 13).unwrap());
}

#[test]
fn every_accepted_date_layout_parses() {
    for (cell, (y, m, d)) in DATE_CELLS {
        let row = RawRowBuilder::from_pairs(minimal_row()).cell("postedDate", *cell).build();
        assert_eq!(
            normalized(&row).posted_date,
            NaiveDate::from_ymd_opt(*y, *m, *d).unwrap(),
            "postedDate {cell:?}"
        );
    }
}

#[test]
fn unreadable_dates_fall_back_to_today() {
    for cell in BAD_DATE_CELLS {
        let row = RawRowBuilder::from_pairs(minimal_row()).cell("postedDate", *cell).build();
        assert_eq!(normalized(&row).posted_date, today(), "postedDate {cell:?}");
    }
    assert_eq!(normalized(&row_from(minimal_row())).posted_date, today());
}

#[rstest]
#[case::serial(CellValue::Number(45458.0), Some((2024, 6, 15)))]
#[case::serial_with_time(CellValue::Number(45458.75), Some((2024, 6, 15)))]
#[case::zero(CellValue::Number(0.0), None)]
#[case::negative(CellValue::Number(-3.0), None)]
#[case::boolean(CellValue::Bool(true), None)]
fn non_text_dates(#[case] cell: CellValue, #[case] expected: Option<(i32, u32, u32)>) {
    let row = RawRowBuilder::from_pairs(minimal_row()).cell("postedDate", cell).build();
    let expected = expected
        .map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
        .unwrap_or_else(today);
    assert_eq!(normalized(&row).posted_date, expected);
}

// ---------------------------------------------------------------------------
// Requirements
// ---------------------------------------------------------------------------

#[test]
fn requirements_split_on_lines_and_drop_empties() {
    let row = RawRowBuilder::from_pairs(minimal_row()).cell("requirements", "A\nB\n\nC").build();
    assert_eq!(normalized(&row).requirements, vec!["A", "B", "C"]);
}

#[test]
fn requirements_accept_windows_line_endings() {
    let row = RawRowBuilder::from_pairs(minimal_row()).cell("requirements", "A\r\nB\r\n").build();
    assert_eq!(normalized(&row).requirements, vec!["A", "B"]);
}

#[rstest]
#[case::absent(None)]
#[case::number(Some(CellValue::Number(3.0)))]
#[case::boolean(Some(CellValue::Bool(false)))]
fn non_text_requirements_get_placeholder(#[case] cell: Option<CellValue>) {
    let mut row = row_from(minimal_row());
    if let Some(cell) = cell {
        row.insert("requirements", cell);
    }
    assert_eq!(normalized(&row).requirements, vec![NO_REQUIREMENTS]);
}

// ---------------------------------------------------------------------------
// Salaries and defaults
// ---------------------------------------------------------------------------

#[rstest]
#[case::absent(None, 0.0)]
#[case::number(Some(CellValue::Number(50000.0)), 50000.0)]
#[case::padded_text(Some(CellValue::from(" 65000 ")), 65000.0)]
#[case::fraction(Some(CellValue::from("1234.5")), 1234.5)]
#[case::garbage(Some(CellValue::from("competitive")), 0.0)]
#[case::negative(Some(CellValue::Number(-10.0)), 0.0)]
#[case::infinite(Some(CellValue::from("inf")), 0.0)]
#[case::boolean(Some(CellValue::Bool(true)), 0.0)]
fn salary_min_coercion(#[case] cell: Option<CellValue>, #[case] expected: f64) {
    let mut row = row_from(minimal_row());
    if let Some(cell) = cell {
        row.insert("salaryMin", cell);
    }
    assert_eq!(normalized(&row).salary.min, expected);
}

#[test]
fn minimal_row_takes_every_default() {
    let job = normalized(&row_from(minimal_row()));
    assert_job_fields!(job,
        job_type: JobType::FullTime,
        description: "",
        application_url: "#",
        company_logo: PLACEHOLDER_LOGO,
    );
    assert_eq!(job.salary.currency, "USD");
    assert_eq!((job.salary.min, job.salary.max), (0.0, 0.0));
}

#[test]
fn unknown_type_is_kept_verbatim() {
    let row = RawRowBuilder::from_pairs(minimal_row()).cell("type", "INTERNSHIP").build();
    assert_eq!(normalized(&row).job_type, JobType::Other("INTERNSHIP".to_string()));
}

#[test]
fn extra_columns_are_ignored() {
    let row = RawRowBuilder::from_pairs(complete_row()).cell("notes", "internal").build();
    assert_eq!(normalized(&row), normalized(&row_from(complete_row())));
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// Snapshot of a fully populated row. Update with `cargo insta review`.
#[test]
fn snapshot_complete_row() {
    insta::assert_json_snapshot!("complete_row", normalized(&row_from(complete_row())));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn identity_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ,.-]{0,24}"
}

fn any_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        ".{0,30}".prop_map(CellValue::Text),
        any::<f64>().prop_map(CellValue::Number),
        any::<bool>().prop_map(CellValue::Bool),
    ]
}

proptest! {
    /// Any row carrying the four identity cells normalises, whatever else
    /// the optional cells hold, and the result satisfies the invariants.
    #[test]
    fn identity_cells_are_sufficient(
        id in identity_text(),
        title in identity_text(),
        company in identity_text(),
        location in identity_text(),
        optional in proptest::collection::vec(any_cell(), 9),
    ) {
        let mut row = RawRowBuilder::identity(&id, &title, &company, &location).build();
        for (column, cell) in jobboard_core::COLUMNS[4..].iter().zip(optional) {
            row.insert(*column, cell);
        }
        let job = try_normalize(&row, today());
        prop_assert!(job.is_ok(), "rejected {:?}", row);
        let job = job.unwrap();
        assert_record_invariants(&job);
        prop_assert_eq!(&job.id, &id);
        prop_assert_eq!(&job.location, &location);
    }

    /// Requirements are the non-empty lines of the cell, in order.
    #[test]
    fn requirements_are_the_non_empty_lines(lines in proptest::collection::vec("[a-z ]{0,8}", 0..8)) {
        let text = lines.join("\n");
        let row = RawRowBuilder::from_pairs(minimal_row()).cell("requirements", text.as_str()).build();
        let expected: Vec<String> = lines.into_iter().filter(|l| !l.is_empty()).collect();
        prop_assert_eq!(normalized(&row).requirements, expected);
    }

    /// A well-formed ISO date is returned unchanged.
    #[test]
    fn iso_dates_round_trip(days in 0u64..40_000) {
        let date = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + chrono::Days::new(days);
        let row = RawRowBuilder::from_pairs(minimal_row())
            .cell("postedDate", date.format("%Y-%m-%d").to_string())
            .build();
        prop_assert_eq!(normalized(&row).posted_date, date);
    }

    /// Salary amounts are never negative or non-finite.
    #[test]
    fn salaries_are_non_negative(min in any_cell(), max in any_cell()) {
        let row = RawRowBuilder::from_pairs(minimal_row())
            .cell("salaryMin", min)
            .cell("salaryMax", max)
            .build();
        assert_record_invariants(&normalized(&row));
    }
}
