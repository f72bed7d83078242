//! Recurrence expansion.
//!
//! Walks a day-by-day cursor from the rule's start date, testing each candidate
//! against the rule and jumping ahead on period boundaries to honor the
//! interval. Work is bounded by [`MAX_SCAN_DAYS`] candidate days and
//! [`MAX_OCCURRENCES`] emitted dates.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::calendar::{
    add_days, days_in_month, first_of_month_after, first_of_year_after, is_last_day_of_month,
    nth_weekday_of_month, weekday_index,
};
use crate::constants::{MAX_OCCURRENCES, MAX_SCAN_DAYS};
use crate::spec::{DailyStep, Frequency, MonthlyMode, RecurrenceSpec};

/// Ordered, duplicate-free occurrence dates produced by [`expand`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OccurrenceSeries {
    dates: Vec<NaiveDate>,
}

impl OccurrenceSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDate> {
        self.dates.iter()
    }

    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// Occurrences falling in the given month.
    pub fn in_month(&self, year: i32, month: u32) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates
            .iter()
            .copied()
            .filter(move |d| d.year() == year && d.month() == month)
    }

    pub fn into_vec(self) -> Vec<NaiveDate> {
        self.dates
    }
}

impl IntoIterator for OccurrenceSeries {
    type Item = NaiveDate;
    type IntoIter = std::vec::IntoIter<NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.into_iter()
    }
}

impl<'a> IntoIterator for &'a OccurrenceSeries {
    type Item = &'a NaiveDate;
    type IntoIter = std::slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

/// Expand a rule into its concrete occurrence dates.
///
/// Never fails: a rule without a start date, an end before the start, or
/// qualifiers that never match all produce an empty series.
pub fn expand(spec: &RecurrenceSpec) -> OccurrenceSeries {
    let Some(start) = spec.start else {
        debug!("No start date, nothing to expand");
        return OccurrenceSeries::default();
    };

    let interval = spec.effective_interval();
    let mut dates = Vec::new();
    let mut cursor = start;
    let mut scanned = 0;

    while scanned < MAX_SCAN_DAYS && dates.len() < MAX_OCCURRENCES {
        if spec.end.is_some_and(|end| cursor > end) {
            break;
        }

        if cursor >= start && matches(spec, start, cursor) {
            dates.push(cursor);
        }

        scanned += 1;
        match advance(spec, interval, cursor) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    // The walk only moves forward, so this is normally a no-op.
    dates.retain(|d| *d >= start);
    dates.sort_unstable();
    dates.dedup();
    dates.truncate(MAX_OCCURRENCES);

    debug!(
        frequency = %spec.frequency,
        interval,
        scanned,
        occurrences = dates.len(),
        "Expanded recurrence"
    );

    OccurrenceSeries { dates }
}

/// Whether `cursor` is an occurrence of the rule.
fn matches(spec: &RecurrenceSpec, start: NaiveDate, cursor: NaiveDate) -> bool {
    match spec.frequency {
        Frequency::Daily => true,
        Frequency::Weekly => spec.days_of_week.contains(&weekday_index(cursor)),
        Frequency::Monthly => match spec.monthly_mode {
            MonthlyMode::DayOfMonth => {
                let day = cursor.day();
                // A target past the end of a short month lands on its last day
                day == spec.day_of_month
                    || (is_last_day_of_month(cursor)
                        && spec.day_of_month > days_in_month(cursor.year(), cursor.month()))
            }
            MonthlyMode::NthWeekday => {
                nth_weekday_of_month(cursor.year(), cursor.month(), spec.weekday_in_month, spec.nth)
                    == Some(cursor)
            }
        },
        Frequency::Yearly => cursor.month() == start.month() && cursor.day() == start.day(),
    }
}

/// Next candidate day after `cursor`, or `None` past the representable range.
fn advance(spec: &RecurrenceSpec, interval: u32, cursor: NaiveDate) -> Option<NaiveDate> {
    match spec.frequency {
        Frequency::Daily => match spec.daily_step {
            DailyStep::EveryDay => add_days(cursor, 1),
            DailyStep::Interval => add_days(cursor, u64::from(interval)),
        },
        Frequency::Weekly => {
            if weekday_index(cursor) == 6 {
                // Saturday: land on the Sunday opening the interval-th following week
                add_days(cursor, 7 * u64::from(interval) - 6)
            } else {
                add_days(cursor, 1)
            }
        }
        Frequency::Monthly => {
            if is_last_day_of_month(cursor) {
                first_of_month_after(cursor, interval)
            } else {
                add_days(cursor, 1)
            }
        }
        Frequency::Yearly => {
            if cursor.month() == 12 && cursor.day() == 31 {
                first_of_year_after(cursor, interval)
            } else {
                add_days(cursor, 1)
            }
        }
    }
}
