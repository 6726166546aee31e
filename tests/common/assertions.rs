//! Domain-specific assertion macros for jobboard harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* record or row broke and *what* the normalizer
//! produced instead.

use jobboard_core::JobRecord;

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert several fields of a `JobRecord` at once.
///
/// ```rust
/// assert_job_fields!(job, id: "101", title: "Senior Rust Engineer");
/// ```
#[macro_export]
macro_rules! assert_job_fields {
    ($job:expr, $($field:ident : $value:expr),+ $(,)?) => {{
        let job: &jobboard_core::JobRecord = &$job;
        $(
            if job.$field != $value {
                panic!(
                    "assert_job_fields! failed on job {:?}:\n  field:    {}\n  expected: {:?}\n  actual:   {:?}",
                    job.id,
                    stringify!($field),
                    $value,
                    job.$field
                );
            }
        )+
    }};
}

/// Assert that the normalizer rejects a row, optionally naming the missing
/// fields it must report.
///
/// ```rust
/// assert_rejected!(row, today());
/// assert_rejected!(row, today(), ["id", "title"]);
/// ```
#[macro_export]
macro_rules! assert_rejected {
    ($row:expr, $today:expr) => {{
        let row: &jobboard_core::RawRow = &$row;
        if let Ok(job) = jobboard_core::normalizer::try_normalize(row, $today) {
            panic!(
                "assert_rejected! failed: row was accepted.\n  row: {:?}\n  job: {:?}",
                row, job
            );
        }
    }};
    ($row:expr, $today:expr, [$($missing:expr),+ $(,)?]) => {{
        let row: &jobboard_core::RawRow = &$row;
        match jobboard_core::normalizer::try_normalize(row, $today) {
            Ok(job) => panic!(
                "assert_rejected! failed: row was accepted.\n  row: {:?}\n  job: {:?}",
                row, job
            ),
            Err(rejection) => {
                let expected: Vec<&str> = vec![$($missing),+];
                pretty_assertions::assert_eq!(rejection.missing, expected, "missing fields for row {:?}", row);
            }
        }
    }};
}

/// Assert that catalog ids appear in exactly this order.
#[macro_export]
macro_rules! assert_ids {
    ($jobs:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $jobs.iter().map(|job| job.id.as_str()).collect();
        let expected: Vec<&str> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "job ids differ");
    }};
}

// ---------------------------------------------------------------------------
// Invariant helpers
// ---------------------------------------------------------------------------

/// Check the guarantees every normalised record carries, whatever the input.
pub fn assert_record_invariants(job: &JobRecord) {
    for (name, value) in [
        ("id", &job.id),
        ("title", &job.title),
        ("company", &job.company),
        ("location", &job.location),
    ] {
        assert!(!value.is_empty(), "required field {name} is empty in {job:?}");
    }
    assert!(
        job.requirements.iter().all(|line| !line.is_empty()),
        "empty requirement line in {job:?}"
    );
    assert!(
        job.salary.min.is_finite() && job.salary.min >= 0.0,
        "salary.min not a non-negative number in {job:?}"
    );
    assert!(
        job.salary.max.is_finite() && job.salary.max >= 0.0,
        "salary.max not a non-negative number in {job:?}"
    );
    assert!(!job.salary.currency.is_empty(), "currency empty in {job:?}");
    assert!(!job.application_url.is_empty(), "applicationUrl empty in {job:?}");
    assert!(!job.company_logo.is_empty(), "companyLogo empty in {job:?}");
}
