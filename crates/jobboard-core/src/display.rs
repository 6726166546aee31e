//! Human-facing formatting shared by the TUI and the CLI.

use crate::types::{JobType, Salary};
use chrono::{DateTime, NaiveDate, Utc};

/// `FULL_TIME` → `FULL TIME`. Only the first underscore is replaced.
pub fn type_label(job_type: &JobType) -> String {
    job_type.as_str().replacen('_', " ", 1)
}

/// `50,000 - 100,000 USD`.
pub fn salary_range(salary: &Salary) -> String {
    format!(
        "{} - {} {}",
        group_thousands(salary.min),
        group_thousands(salary.max),
        salary.currency
    )
}

/// Magnitude above which `f64` has no fraction digits left to round.
const ROUNDING_LIMIT: f64 = 1e15;

/// Format a number with `,` grouping and at most three fraction digits.
pub fn group_thousands(value: f64) -> String {
    let rounded = if value.abs() >= ROUNDING_LIMIT {
        value
    } else {
        (value * 1000.0).round() / 1000.0
    };
    let negative = rounded < 0.0;
    let text = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if negative { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// Relative phrase for a posting date, e.g. `3 days ago` or `about 1 month ago`.
///
/// The date is taken as midnight UTC.
pub fn posted_ago(posted: NaiveDate, now: DateTime<Utc>) -> String {
    let posted = posted.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
    let seconds = (now - posted).num_seconds();
    let phrase = distance_phrase(seconds.unsigned_abs());
    if seconds < 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

const MINUTES_IN_DAY: f64 = 1440.0;
const MINUTES_IN_MONTH: f64 = 43200.0;

fn distance_phrase(seconds: u64) -> String {
    let minutes = (seconds as f64 / 60.0).round();

    if minutes < 1.0 {
        return "less than a minute".to_string();
    }
    if minutes < 45.0 {
        return plural(minutes as u64, "minute");
    }
    if minutes < 90.0 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {}", plural((minutes / 60.0).round() as u64, "hour"));
    }
    if minutes < 2520.0 {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        return plural((minutes / MINUTES_IN_DAY).round() as u64, "day");
    }
    if minutes < 2.0 * MINUTES_IN_MONTH {
        let months = (minutes / MINUTES_IN_MONTH).round() as u64;
        return format!("about {}", plural(months, "month"));
    }

    let months = (minutes / MINUTES_IN_MONTH).floor() as u64;
    if months < 12 {
        return plural(months, "month");
    }

    let years = months / 12;
    match months % 12 {
        0..=2 => format!("about {}", plural(years, "year")),
        3..=8 => format!("over {}", plural(years, "year")),
        _ => format!("almost {}", plural(years + 1, "year")),
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
