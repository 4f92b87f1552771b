use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt;
use thiserror::Error;
use tracing::debug;

const JUST_NOW: &str = "たった今";

/// Naive layouts accepted by [`parse_instant`], interpreted in the local zone.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Which argument of a relative-time call was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeArg {
    Target,
    Reference,
}

impl fmt::Display for TimeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeArg::Target => f.write_str("target"),
            TimeArg::Reference => f.write_str("reference"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeAgoError {
    #[error("Invalid {0}")]
    InvalidInput(TimeArg),
}

/// Format `target` as a short "time ago" label relative to `reference`.
///
/// Future targets collapse to "just now". Past the one-week mark the label
/// switches to a calendar date taken from `target`'s own zone, with the year
/// only when it differs from the reference year.
pub fn format_time_ago<Tz: TimeZone>(
    target: &DateTime<Tz>,
    reference: &DateTime<Tz>,
) -> String {
    if target > reference {
        return JUST_NOW.to_string();
    }

    let elapsed_ms = reference.timestamp_millis() - target.timestamp_millis();
    let seconds = elapsed_ms / 1000;
    if seconds < 60 {
        return JUST_NOW.to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}分前");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}時間前");
    }

    let days = hours / 24;
    if days < 7 {
        return format!("{days}日前");
    }

    let reference_year = reference.with_timezone(&target.timezone()).year();
    if target.year() == reference_year {
        return format!("{}月{}日", target.month(), target.day());
    }

    format!("{}年{}月{}日", target.year(), target.month(), target.day())
}

/// Format a local timestamp relative to the current wall-clock time.
pub fn time_ago(target: &DateTime<Local>) -> String {
    format_time_ago(target, &Local::now())
}

/// Parse a user-supplied timestamp into a local instant.
///
/// Accepts RFC 3339, naive `YYYY-MM-DD[T ]HH:MM[:SS[.fff]]` in the local zone,
/// and bare `YYYY-MM-DD` (local midnight). Local times that do not exist or
/// are ambiguous (DST transitions) are rejected.
pub fn parse_instant(input: &str, which: TimeArg) -> Result<DateTime<Local>, TimeAgoError> {
    let input = input.trim();

    let parsed = match DateTime::parse_from_rfc3339(input) {
        Ok(dt) => Some(dt.with_timezone(&Local)),
        Err(_) => {
            parse_naive(input).and_then(|naive| Local.from_local_datetime(&naive).single())
        }
    };

    parsed.ok_or_else(|| {
        debug!(input = input, argument = %which, "Rejected timestamp");
        TimeAgoError::InvalidInput(which)
    })
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Parse both timestamps and format the target relative to the reference.
///
/// The target is checked first. A missing reference means "now".
pub fn format_time_ago_str(
    target: &str,
    reference: Option<&str>,
) -> Result<String, TimeAgoError> {
    let target = parse_instant(target, TimeArg::Target)?;
    let reference = match reference {
        Some(reference) => parse_instant(reference, TimeArg::Reference)?,
        None => Local::now(),
    };
    Ok(format_time_ago(&target, &reference))
}
