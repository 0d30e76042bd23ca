// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Human-readable formatting for timestamps, byte counts, and short labels.
//!
//! Every function here is total and side-effect free; only
//! [`format_relative_time`] reads the clock.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

const FILE_SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Describe how long ago `past` was, relative to the current time.
///
/// See [`format_relative_time_at`] for the buckets.
pub fn format_relative_time<Tz: TimeZone>(past: &DateTime<Tz>) -> String {
    format_relative_time_at(past, &Utc::now())
}

/// Describe how long ago `past` was, relative to `now`.
///
/// Buckets: under a minute is `"just now"`, then minutes, hours, days,
/// weeks (`days / 7`), months (`days / 30`) and years (`days / 365`), each
/// floored. Instants in the future also read as `"just now"`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use creator_input::utils::format_relative_time_at;
///
/// let now = Utc::now();
/// assert_eq!(format_relative_time_at(&(now - Duration::minutes(5)), &now), "5 minutes ago");
/// ```
pub fn format_relative_time_at<Tz: TimeZone, Tz2: TimeZone>(
    past: &DateTime<Tz>,
    now: &DateTime<Tz2>,
) -> String {
    let elapsed_ms = now.timestamp_millis() - past.timestamp_millis();
    let seconds = elapsed_ms.div_euclid(1000);
    let minutes = seconds.div_euclid(60);
    let hours = minutes.div_euclid(60);
    let days = hours.div_euclid(24);

    if seconds < 60 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return ago(minutes, "minute");
    }
    if hours < 24 {
        return ago(hours, "hour");
    }
    if days < 7 {
        return ago(days, "day");
    }
    if days < 30 {
        return ago(days / 7, "week");
    }
    if days < 365 {
        return ago(days / 30, "month");
    }
    ago(days / 365, "year")
}

fn ago(count: i64, unit: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

/// Format a byte count using binary (1024) units.
///
/// The unit is the largest of Bytes/KB/MB/GB/TB that keeps the scaled value at
/// or above one. The value is rounded half-up to two decimals with trailing
/// zeros dropped, so `1152` reads `"1.13 KB"`.
///
/// # Examples
///
/// ```
/// use creator_input::utils::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // Integer powers avoid float error at exact unit boundaries.
    let mut index = 0;
    while index + 1 < FILE_SIZE_UNITS.len() && bytes >= 1024u64.pow(index as u32 + 1) {
        index += 1;
    }

    let scaled = bytes as f64 / 1024f64.powi(index as i32);
    // `round` breaks exact ties upward; `{:.2}` would round them to even.
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{rounded} {}", FILE_SIZE_UNITS[index])
}

/// Format the clock time of an instant on a 12-hour clock, e.g. `"2:30 PM"`.
///
/// The instant is rendered in its own time zone; pass a `DateTime<Local>` for
/// the user's wall clock.
pub fn format_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    instant.format("%-I:%M %p").to_string()
}

/// Format the calendar date of an instant, e.g. `"Jan 15, 2024"`.
pub fn format_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    instant.format("%b %-d, %Y").to_string()
}

/// Shorten `value` to `max_length` characters, ending in `"..."` when cut.
///
/// Strings that already fit are returned unchanged. Truncated output is
/// exactly `max_length` characters long whenever `max_length >= 3`. Below that
/// the result is just `"..."`; characters are never counted back from the end
/// of the string.
pub fn truncate_string(value: &str, max_length: usize) -> String {
    if value.chars().count() <= max_length {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max_length.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

/// Lower-case the string, then upper-case the first character of each
/// space-separated word. Runs of spaces are preserved as-is.
pub fn to_title_case(value: &str) -> String {
    value
        .to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
