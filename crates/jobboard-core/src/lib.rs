//! jobboard-core — job board core library.
//!
//! This crate holds the data model and the pure logic shared by every
//! frontend: the record normalizer, the batch catalog, schema.org structured
//! data, display formatting and the post-job form.
//!
//! # Data flow
//!
//! ```text
//! RawRow ──► normalizer ──► JobRecord ──► JobCatalog ──► views
//!                                 │
//!                                 └──► structured_data (JSON-LD)
//! ```
//!
//! Decoding rows out of spreadsheet bytes lives in `jobboard-sheets`.

pub mod catalog;
pub mod config;
pub mod display;
pub mod normalizer;
pub mod posting;
pub mod structured_data;
pub mod types;

pub use catalog::{JobCatalog, LoadError};
pub use normalizer::{normalize, normalize_at};
pub use types::{CellValue, JobRecord, JobType, RawRow, Salary, COLUMNS};
