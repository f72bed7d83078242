//! Calendar arithmetic used by the recurrence engine.
//!
//! Weekdays are indexed 0-6 with Sunday = 0 throughout recurdate.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{RecurError, RecurResult};

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Number of days in the given month (1-12). Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.day() == days_in_month(date.year(), date.month())
}

/// Weekday index of a date, Sunday = 0.
pub fn weekday_index(date: NaiveDate) -> u8 {
    // num_days_from_sunday is always < 7
    date.weekday().num_days_from_sunday() as u8
}

/// Date of the `nth` occurrence of `weekday` in the given month, counting from day 1.
///
/// Returns `None` when the month has fewer than `nth` such weekdays, when `nth`
/// is zero, or when `weekday` is not a valid index.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: u8, nth: u32) -> Option<NaiveDate> {
    if nth == 0 {
        return None;
    }

    let mut seen = 0;
    for day in 1..=days_in_month(year, month) {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        if weekday_index(date) == weekday {
            seen += 1;
            if seen == nth {
                return Some(date);
            }
        }
    }

    None
}

/// Which occurrence of its own weekday `date` is within its month (1-5).
pub fn nth_occurrence_in_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// First day of the month `months` months after the month containing `date`.
pub fn first_of_month_after(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.with_day(1)?.checked_add_months(Months::new(months))
}

/// January 1 of the year `years` years after the year containing `date`.
pub fn first_of_year_after(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = date.year().checked_add(i32::try_from(years).ok()?)?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

pub fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}

pub fn weekday_name(index: u8) -> Option<&'static str> {
    WEEKDAY_NAMES.get(usize::from(index)).copied()
}

pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// English ordinal suffix for `n` ("st", "nd", "rd", "th").
pub fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Long, human-readable date ("January 7, 2024").
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Parse a weekday from an index ("0"-"6"), a full name or a common abbreviation.
pub fn parse_weekday(input: &str) -> RecurResult<u8> {
    let lower = input.trim().to_lowercase();

    if let Ok(index) = lower.parse::<u8>() {
        if index < 7 {
            return Ok(index);
        }
        return Err(RecurError::InvalidInput(format!(
            "Weekday index {} is out of range (0 = Sunday .. 6 = Saturday)",
            index
        )));
    }

    let abbrevs: [(&str, u8); 16] = [
        ("su", 0),
        ("sun", 0),
        ("mo", 1),
        ("mon", 1),
        ("tu", 2),
        ("tue", 2),
        ("tues", 2),
        ("we", 3),
        ("wed", 3),
        ("th", 4),
        ("thu", 4),
        ("thurs", 4),
        ("fr", 5),
        ("fri", 5),
        ("sa", 6),
        ("sat", 6),
    ];

    if let Some((_, index)) = abbrevs.iter().find(|(abbr, _)| *abbr == lower) {
        return Ok(*index);
    }

    WEEKDAY_NAMES
        .iter()
        .position(|name| name.to_lowercase() == lower)
        .and_then(|i| u8::try_from(i).ok())
        .ok_or_else(|| RecurError::InvalidInput(format!("Unknown weekday: \"{}\"", input)))
}
