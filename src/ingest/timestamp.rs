//! ISO-8601 timestamp parsing and report date formatting.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};

/// Output format for record dates.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// ISO-8601 calendar date with optional time and UTC offset, in extended
/// (`2024-01-01T10:00:00+07:00`) or basic (`20240101T100000+0700`) form.
/// Times may stop after the hour or minute; fractions take `.` or `,`;
/// offsets may omit the minutes.
fn iso_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:",
            r"(?P<y>[0-9]{4})-(?P<m>[0-9]{2})-(?P<d>[0-9]{2})",
            r"(?:[T ](?P<h>[0-9]{2})",
            r"(?::(?P<mi>[0-9]{2})(?::(?P<s>[0-9]{2})(?:[.,](?P<f>[0-9]+))?)?)?",
            r"(?P<off>Z|[+-][0-9]{2}(?::?[0-9]{2})?)?)?",
            r"|",
            r"(?P<by>[0-9]{4})(?P<bm>[0-9]{2})(?P<bd>[0-9]{2})",
            r"(?:T(?P<bh>[0-9]{2})",
            r"(?:(?P<bmi>[0-9]{2})(?:(?P<bs>[0-9]{2})(?:[.,](?P<bf>[0-9]+))?)?)?",
            r"(?P<boff>Z|[+-][0-9]{2}(?:[0-9]{2})?)?)?",
            r")$",
        ))
        .expect("valid ISO-8601 regex")
    })
}

/// Parses an ISO-8601 timestamp into its local (wall clock) date-time.
///
/// Offsets are validated but never applied, so the returned value is the
/// date-time in the timestamp's own offset. A bare date parses as midnight.
pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    let caps = iso_re().captures(raw.trim())?;
    // Extended and basic forms use distinct group names.
    let prefix = if caps.name("y").is_some() { "" } else { "b" };
    let group = |name: &str| caps.name(&format!("{prefix}{name}")).map(|m| m.as_str());
    let number = |name: &str| group(name).map(|v| v.parse::<u32>()).transpose().ok();

    let date = NaiveDate::from_ymd_opt(
        group("y")?.parse().ok()?,
        number("m")??,
        number("d")??,
    )?;
    let time = NaiveTime::from_hms_nano_opt(
        number("h")?.unwrap_or(0),
        number("mi")?.unwrap_or(0),
        number("s")?.unwrap_or(0),
        group("f").map(fraction_nanos).unwrap_or(0),
    )?;
    if !valid_offset(&caps, prefix) {
        return None;
    }
    Some(date.and_time(time))
}

/// Decimal fraction digits as nanoseconds (extra precision is dropped).
fn fraction_nanos(digits: &str) -> u32 {
    digits
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(9)
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn valid_offset(caps: &Captures<'_>, prefix: &str) -> bool {
    let Some(offset) = caps.name(&format!("{prefix}off")) else {
        return true;
    };
    let offset = offset.as_str();
    if offset == "Z" {
        return true;
    }
    let in_range = |v: &str, max: u32| v.is_empty() || v.parse::<u32>().is_ok_and(|n| n <= max);
    in_range(&offset[1..3], 23) && in_range(offset[3..].trim_start_matches(':'), 59)
}

/// Formats a parsed timestamp as a record date (`MM-DD-YYYY`).
pub fn format_date(dt: &NaiveDateTime) -> String {
    dt.format(DATE_FORMAT).to_string()
}

/// Parses and formats in one step.
pub fn to_record_date(raw: &str) -> Option<String> {
    parse(raw).map(|dt| format_date(&dt))
}
