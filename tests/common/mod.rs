//! Shared test utilities for jobboard integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Every helper takes its clock as an argument so results
//! do not depend on the day the suite runs.

pub mod assertions;
pub mod builders;
pub mod fake_job_server;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
