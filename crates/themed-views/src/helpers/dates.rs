//! Date helpers: Indonesian-localised date formatting and second intervals.
//!
//! Formats use PHP `date()` letters, which is what existing theme templates
//! were written against.

use std::fmt::{Display, Write};

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

const MONTHS_FULL: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];
const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];
const DAYS_FULL: [&str; 7] = ["Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu"];
const DAYS_SHORT: [&str; 7] = ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"];

/// Format `at` with PHP `date()` letters, naming months and days in Bahasa Indonesia.
///
/// `F`, `M`, `l` and `D` are localised; other letters follow `date()`. A
/// backslash escapes the next character; unknown characters pass through.
pub fn date_id<Tz>(format: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let month0 = at.month0() as usize;
    let weekday = at.weekday().num_days_from_sunday() as usize;

    let mut out = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            'F' => out.push_str(MONTHS_FULL[month0]),
            'M' => out.push_str(MONTHS_SHORT[month0]),
            'l' => out.push_str(DAYS_FULL[weekday]),
            'D' => out.push_str(DAYS_SHORT[weekday]),
            'd' => push_fmt(&mut out, format_args!("{:02}", at.day())),
            'j' => push_fmt(&mut out, format_args!("{}", at.day())),
            'N' => push_fmt(
                &mut out,
                format_args!("{}", at.weekday().number_from_monday()),
            ),
            'w' => push_fmt(&mut out, format_args!("{weekday}")),
            'z' => push_fmt(&mut out, format_args!("{}", at.ordinal0())),
            'W' => push_fmt(&mut out, format_args!("{:02}", at.iso_week().week())),
            'm' => push_fmt(&mut out, format_args!("{:02}", at.month())),
            'n' => push_fmt(&mut out, format_args!("{}", at.month())),
            't' => push_fmt(
                &mut out,
                format_args!("{}", days_in_month(at.year(), at.month())),
            ),
            'L' => out.push(if is_leap_year(at.year()) { '1' } else { '0' }),
            'Y' => push_fmt(&mut out, format_args!("{}", at.year())),
            'y' => push_fmt(&mut out, format_args!("{:02}", at.year().rem_euclid(100))),
            'a' => out.push_str(if at.hour() < 12 { "am" } else { "pm" }),
            'A' => out.push_str(if at.hour() < 12 { "AM" } else { "PM" }),
            'g' => push_fmt(&mut out, format_args!("{}", at.hour12().1)),
            'h' => push_fmt(&mut out, format_args!("{:02}", at.hour12().1)),
            'G' => push_fmt(&mut out, format_args!("{}", at.hour())),
            'H' => push_fmt(&mut out, format_args!("{:02}", at.hour())),
            'i' => push_fmt(&mut out, format_args!("{:02}", at.minute())),
            's' => push_fmt(&mut out, format_args!("{:02}", at.second())),
            'P' => push_fmt(&mut out, format_args!("{}", at.offset())),
            'U' => push_fmt(&mut out, format_args!("{}", at.timestamp())),
            other => out.push(other),
        }
    }
    out
}

/// [`date_id`] for a Unix timestamp, in UTC. `None` when out of range.
pub fn date_id_timestamp(format: &str, timestamp: i64) -> Option<String> {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|at| date_id(format, &at))
}

/// Format the interval from the epoch to `seconds` with `DateInterval::format` codes.
///
/// Supported: `%y %Y %m %M %d %D %a %h %H %i %I %s %S %R %r %%`. Years, months
/// and days are calendar components, so `%d` wraps at month ends while `%a`
/// counts total days.
pub fn second2time(seconds: u64, format: &str) -> String {
    let at = i64::try_from(seconds)
        .ok()
        .and_then(|s| DateTime::<Utc>::from_timestamp(s, 0))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    let years = at.year() - 1970;
    let months = at.month0();
    let days = at.day0();
    let total_days = seconds / 86_400;

    let mut out = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('y') => push_fmt(&mut out, format_args!("{years}")),
            Some('Y') => push_fmt(&mut out, format_args!("{years:02}")),
            Some('m') => push_fmt(&mut out, format_args!("{months}")),
            Some('M') => push_fmt(&mut out, format_args!("{months:02}")),
            Some('d') => push_fmt(&mut out, format_args!("{days}")),
            Some('D') => push_fmt(&mut out, format_args!("{days:02}")),
            Some('a') => push_fmt(&mut out, format_args!("{total_days}")),
            Some('h') => push_fmt(&mut out, format_args!("{}", at.hour())),
            Some('H') => push_fmt(&mut out, format_args!("{:02}", at.hour())),
            Some('i') => push_fmt(&mut out, format_args!("{}", at.minute())),
            Some('I') => push_fmt(&mut out, format_args!("{:02}", at.minute())),
            Some('s') => push_fmt(&mut out, format_args!("{}", at.second())),
            Some('S') => push_fmt(&mut out, format_args!("{:02}", at.second())),
            Some('R') => out.push('+'),
            Some('r') => {}
            Some('%') => out.push('%'),
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }
    out
}

fn push_fmt(out: &mut String, args: std::fmt::Arguments<'_>) {
    // Writing into a String cannot fail.
    let _ = out.write_fmt(args);
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}
