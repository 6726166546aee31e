//! Encoder — [`RawRow`]s into a single-sheet `.xlsx` workbook.

use crate::SheetError;
use jobboard_core::{CellValue, RawRow};
use rust_xlsxwriter::{Format, Workbook};

/// Write `rows` under a bold header row of `columns` and return the workbook
/// bytes. Cells missing from a row are left empty; multi-line text is
/// written with wrapping enabled.
pub fn encode_rows(sheet_name: &str, columns: &[&str], rows: &[RawRow]) -> Result<Vec<u8>, SheetError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let wrapped = Format::new().set_text_wrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    for (col, name) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let r = index as u32 + 1;
        for (col, name) in columns.iter().enumerate() {
            let c = col as u16;
            match row.get(name) {
                Some(CellValue::Text(s)) if s.contains('\n') => {
                    sheet.write_string_with_format(r, c, s, &wrapped)?;
                }
                Some(CellValue::Text(s)) => {
                    sheet.write_string(r, c, s)?;
                }
                Some(CellValue::Number(n)) => {
                    sheet.write_number(r, c, *n)?;
                }
                Some(CellValue::Bool(b)) => {
                    sheet.write_boolean(r, c, *b)?;
                }
                None => {}
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::debug!(sheet = sheet_name, rows = rows.len(), bytes = bytes.len(), "workbook encoded");
    Ok(bytes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
