//! Test builders — ergonomic constructors for rows, workbooks and catalogs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use fake::faker::address::en::CityName;
use fake::faker::company::en::{CompanyName, Profession};
use fake::faker::lorem::en::{Sentence, Words};
use fake::Fake;
use jobboard_core::{CellValue, JobCatalog, JobType, RawRow, COLUMNS};
use jobboard_sheets::encode_rows;

// ---------------------------------------------------------------------------
// RawRowBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawRow`] fixtures.
///
/// # Example
///
/// ```rust
/// let row = RawRowBuilder::identity("9", "Chef", "Bistro", "Paris")
///     .cell("type", "CONTRACT")
///     .cell("salaryMin", 30000i64)
///     .without("company")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct RawRowBuilder {
    row: RawRow,
}

impl RawRowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the four required columns.
    pub fn identity(id: &str, title: &str, company: &str, location: &str) -> Self {
        Self::new()
            .cell("id", id)
            .cell("title", title)
            .cell("company", company)
            .cell("location", location)
    }

    /// Start from a `(column, value)` table such as the ones in `fixtures`.
    pub fn from_pairs(pairs: Vec<(&'static str, CellValue)>) -> Self {
        Self { row: pairs.into_iter().collect() }
    }

    pub fn cell(mut self, key: &str, value: impl Into<CellValue>) -> Self {
        self.row.insert(key, value);
        self
    }

    /// Blank the cell the way a decoder reports an empty cell.
    pub fn blank(self, key: &str) -> Self {
        self.cell(key, "")
    }

    pub fn without(mut self, key: &str) -> Self {
        self.row.remove(key);
        self
    }

    pub fn build(self) -> RawRow {
        self.row
    }
}

/// Shorthand for `RawRowBuilder::from_pairs(pairs).build()`.
pub fn row_from(pairs: Vec<(&'static str, CellValue)>) -> RawRow {
    RawRowBuilder::from_pairs(pairs).build()
}

/// A plausible fully populated row with random text, for volume tests.
///
/// `id` is always `n` so callers can check ordering.
pub fn fake_row(n: usize) -> RawRow {
    let job_type = JobType::KNOWN[n % JobType::KNOWN.len()].clone();
    let min: i64 = (20_000..90_000).fake();
    let requirements: Vec<String> = (1..5)
        .map(|_| Words(2..5).fake::<Vec<String>>().join(" "))
        .collect();

    RawRowBuilder::new()
        .cell("id", n.to_string())
        .cell("title", Profession().fake::<String>())
        .cell("company", CompanyName().fake::<String>())
        .cell("location", CityName().fake::<String>())
        .cell("type", job_type.as_str())
        .cell("description", Sentence(6..14).fake::<String>())
        .cell("requirements", requirements.join("\n"))
        .cell("salaryMin", min)
        .cell("salaryMax", min + (5_000..40_000).fake::<i64>())
        .cell("salaryCurrency", "USD")
        .cell("postedDate", "2024-06-01")
        .build()
}

/// `count` rows from [`fake_row`], ids `1..=count`.
pub fn fake_rows(count: usize) -> Vec<RawRow> {
    (1..=count).map(fake_row).collect()
}

// ---------------------------------------------------------------------------
// Workbooks and catalogs
// ---------------------------------------------------------------------------

/// Encode rows into `.xlsx` bytes under the standard header.
pub fn workbook(rows: &[RawRow]) -> Vec<u8> {
    encode_rows("Jobs", &COLUMNS, rows).expect("encode test workbook")
}

/// Catalog of the three `board_rows` fixtures.
pub fn board_catalog() -> JobCatalog {
    let rows = super::fixtures::board_rows().into_iter().map(row_from).collect();
    JobCatalog::from_rows_at(rows, super::fixtures::today()).expect("fixture board is valid")
}
