//! Decoder — first worksheet of any workbook format into [`RawRow`]s.
//!
//! The first row is the header. Every later row becomes one [`RawRow`] keyed
//! by header text (case-sensitive). Inside the header range blank cells
//! decode to empty text, so an empty `requirements` cell is still "text".
//! Rows with no content at all and columns with an empty header are skipped.

use crate::SheetError;
use calamine::{open_workbook_auto_from_rs, Data, DataType, Range, Reader};
use jobboard_core::{CellValue, RawRow};
use std::io::Cursor;

/// Decode the first sheet of `bytes` (xlsx, xlsm, xls, xlsb or ods).
pub fn decode_rows(bytes: &[u8]) -> Result<Vec<RawRow>, SheetError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Err(SheetError::Empty),
    };
    let rows = rows_from_range(&range);
    tracing::debug!(rows = rows.len(), "sheet decoded");
    Ok(rows)
}

/// Convert a cell range into header-keyed rows.
pub fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<Option<String>> = header
        .iter()
        .map(|cell| {
            let name = cell.to_string();
            (!name.is_empty()).then_some(name)
        })
        .collect();

    rows.filter(|cells| cells.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|cells| {
            headers
                .iter()
                .zip(cells)
                .filter_map(|(name, cell)| Some((name.clone()?, cell_value(cell)?)))
                .collect()
        })
        .collect()
}

/// Map one cell. Error cells are treated as absent.
fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => Some(CellValue::Text(String::new())),
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|date| CellValue::Text(date.format("%Y-%m-%d").to_string())),
        Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(err) => {
            tracing::debug!(?err, "error cell ignored");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
