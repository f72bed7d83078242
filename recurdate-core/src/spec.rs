//! Recurrence rule types.
//!
//! A `RecurrenceSpec` is a plain value: callers rebuild it whenever any input
//! changes and hand it to [`crate::expand`]. Nothing here validates; qualifiers
//! that make no sense simply never match.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{nth_occurrence_in_month, weekday_index};
use crate::error::RecurError;

/// How often a rule repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Unit noun for an "every N ..." phrase, pluralised when `count > 1`.
    pub fn unit(&self, count: u32) -> &'static str {
        let plural = count > 1;
        match (self, plural) {
            (Frequency::Daily, false) => "day",
            (Frequency::Daily, true) => "days",
            (Frequency::Weekly, false) => "week",
            (Frequency::Weekly, true) => "weeks",
            (Frequency::Monthly, false) => "month",
            (Frequency::Monthly, true) => "months",
            (Frequency::Yearly, false) => "year",
            (Frequency::Yearly, true) => "years",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Frequency {
    type Err = RecurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" | "d" => Ok(Frequency::Daily),
            "weekly" | "week" | "w" => Ok(Frequency::Weekly),
            "monthly" | "month" | "m" => Ok(Frequency::Monthly),
            "yearly" | "year" | "annually" | "y" => Ok(Frequency::Yearly),
            other => Err(RecurError::InvalidInput(format!(
                "Unknown frequency '{}'. Expected daily, weekly, monthly or yearly",
                other
            ))),
        }
    }
}

/// Which qualifier a monthly rule uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthlyMode {
    /// A fixed day of the month, clamped to the month's last day.
    #[default]
    DayOfMonth,
    /// The nth given weekday of the month ("the 2nd Tuesday").
    NthWeekday,
}

impl FromStr for MonthlyMode {
    type Err = RecurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "day-of-month" | "dayofmonth" => Ok(MonthlyMode::DayOfMonth),
            "nth" | "nth-weekday" | "nthweekday" | "weekday" => Ok(MonthlyMode::NthWeekday),
            other => Err(RecurError::InvalidInput(format!(
                "Unknown monthly mode '{}'. Expected 'day' or 'nth'",
                other
            ))),
        }
    }
}

/// How a daily rule advances between candidate days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DailyStep {
    /// Every day is a candidate; `interval` is only descriptive.
    #[default]
    EveryDay,
    /// Step `interval` days at a time.
    Interval,
}

/// Declarative description of a repeating pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceSpec {
    pub frequency: Frequency,
    /// "Every N units". Values below 1 are treated as 1.
    pub interval: u32,
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub end: Option<NaiveDate>,

    // Weekly
    /// Weekday indices, Sunday = 0.
    #[serde(default)]
    pub days_of_week: BTreeSet<u8>,

    // Monthly
    #[serde(default)]
    pub monthly_mode: MonthlyMode,
    pub day_of_month: u32,
    pub nth: u32,
    /// Weekday index, Sunday = 0.
    pub weekday_in_month: u8,

    #[serde(default)]
    pub daily_step: DailyStep,
}

impl Default for RecurrenceSpec {
    fn default() -> Self {
        RecurrenceSpec {
            frequency: Frequency::Daily,
            interval: 1,
            start: None,
            end: None,
            days_of_week: BTreeSet::new(),
            monthly_mode: MonthlyMode::DayOfMonth,
            day_of_month: 1,
            nth: 1,
            weekday_in_month: 0,
            daily_step: DailyStep::EveryDay,
        }
    }
}

impl RecurrenceSpec {
    /// A rule starting on `start`, with monthly qualifiers taken from the start
    /// date: its day of month, its weekday, and which occurrence of that weekday
    /// it is.
    pub fn new(frequency: Frequency, start: NaiveDate) -> Self {
        RecurrenceSpec {
            frequency,
            start: Some(start),
            day_of_month: start.day(),
            nth: nth_occurrence_in_month(start),
            weekday_in_month: weekday_index(start),
            ..Default::default()
        }
    }

    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_days_of_week(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.days_of_week = days.into_iter().collect();
        self
    }

    pub fn with_day_of_month(mut self, day: u32) -> Self {
        self.monthly_mode = MonthlyMode::DayOfMonth;
        self.day_of_month = day;
        self
    }

    pub fn with_nth_weekday(mut self, nth: u32, weekday: u8) -> Self {
        self.monthly_mode = MonthlyMode::NthWeekday;
        self.nth = nth;
        self.weekday_in_month = weekday;
        self
    }

    pub fn with_daily_step(mut self, step: DailyStep) -> Self {
        self.daily_step = step;
        self
    }

    /// Interval with the "at least one" floor applied.
    pub fn effective_interval(&self) -> u32 {
        self.interval.max(1)
    }
}
