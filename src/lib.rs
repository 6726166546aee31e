//! jobboard — browse, inspect, template and upload spreadsheet job postings.
//!
//! # Architecture
//!
//! ```text
//! DataSource ──► decode ──► normalizer ──► JobCatalog ──► TUI / CLI
//!                                              │
//!                                              └──► JSON-LD
//! ```
//!
//! The library crates do the work: `jobboard-core` (model, normalizer,
//! catalog, display, structured data, post-job form, config),
//! `jobboard-sheets` (sources, spreadsheet codec, template/upload/post
//! flows) and `jobboard-tui`. This crate holds the non-interactive
//! subcommands used by the binary.

pub mod commands;
