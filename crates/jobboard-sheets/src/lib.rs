//! jobboard-sheets — spreadsheet adapters for jobboard.
//!
//! Each module covers one edge of the spreadsheet round-trip: fetching the
//! job sheet from a [`DataSource`], decoding it into
//! [`RawRow`](jobboard_core::RawRow)s, encoding rows back into `.xlsx`
//! bytes, and the simulated template / upload / post-job flows built on top.

pub mod decode;
pub mod encode;
pub mod load;
pub mod post;
pub mod source;
pub mod template;
pub mod upload;

pub use decode::decode_rows;
pub use encode::encode_rows;
pub use load::load_catalog;
pub use source::DataSource;

use jobboard_core::LoadError;

/// Spreadsheet container errors.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Excel file is empty")]
    Empty,
    #[error("malformed spreadsheet: {0}")]
    Malformed(#[from] calamine::Error),
    #[error("failed to write spreadsheet: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<SheetError> for LoadError {
    fn from(err: SheetError) -> Self {
        LoadError::Decode(err.to_string())
    }
}
