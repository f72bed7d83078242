//! Human-readable description of a recurrence rule.

use std::fmt;

use crate::calendar::{format_long, ordinal_suffix, weekday_name};
use crate::spec::{Frequency, MonthlyMode, RecurrenceSpec};

/// The lines of a rule summary, each already phrased for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// "Every week", "Every 3 months"
    pub frequency: String,
    /// Pattern qualifier, when the rule has one worth showing.
    pub on: Option<String>,
    pub starts: String,
    pub ends: String,
}

impl Summary {
    pub fn of(spec: &RecurrenceSpec) -> Self {
        Summary {
            frequency: every_phrase(spec.frequency, spec.effective_interval()),
            on: on_phrase(spec),
            starts: spec
                .start
                .map(format_long)
                .unwrap_or_else(|| "Not set".to_string()),
            ends: spec
                .end
                .map(format_long)
                .unwrap_or_else(|| "Never".to_string()),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frequency: {}.", self.frequency)?;
        if let Some(on) = &self.on {
            writeln!(f, "On: {}.", on)?;
        }
        writeln!(f, "Starts: {}.", self.starts)?;
        write!(f, "Ends: {}.", self.ends)
    }
}

/// "Every week" for an interval of one, "Every 2 weeks" otherwise.
pub fn every_phrase(frequency: Frequency, interval: u32) -> String {
    if interval == 1 {
        format!("Every {}", frequency.unit(1))
    } else {
        format!("Every {} {}", interval, frequency.unit(interval))
    }
}

/// "The 2nd Tuesday"
pub fn nth_weekday_phrase(nth: u32, weekday: u8) -> String {
    format!(
        "{}{} {}",
        nth,
        ordinal_suffix(nth),
        weekday_name(weekday).unwrap_or("day")
    )
}

fn on_phrase(spec: &RecurrenceSpec) -> Option<String> {
    match spec.frequency {
        Frequency::Weekly if !spec.days_of_week.is_empty() => {
            let names: Vec<&str> = spec
                .days_of_week
                .iter()
                .filter_map(|d| weekday_name(*d))
                .collect();
            Some(names.join(", "))
        }
        Frequency::Monthly => Some(match spec.monthly_mode {
            MonthlyMode::DayOfMonth => format!("Day {} of the month", spec.day_of_month),
            MonthlyMode::NthWeekday => format!(
                "The {} of the month",
                nth_weekday_phrase(spec.nth, spec.weekday_in_month)
            ),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_phrase_pluralises() {
        assert_eq!(every_phrase(Frequency::Daily, 1), "Every day");
        assert_eq!(every_phrase(Frequency::Weekly, 2), "Every 2 weeks");
        assert_eq!(every_phrase(Frequency::Yearly, 10), "Every 10 years");
    }

    #[test]
    fn weekly_lists_days_in_order() {
        let spec = RecurrenceSpec::new(Frequency::Weekly, date(2024, 1, 1)).with_days_of_week([3, 1]);
        let summary = Summary::of(&spec);
        assert_eq!(summary.on.as_deref(), Some("Monday, Wednesday"));
    }

    #[test]
    fn weekly_without_days_has_no_qualifier() {
        let spec = RecurrenceSpec::new(Frequency::Weekly, date(2024, 1, 1));
        assert_eq!(Summary::of(&spec).on, None);
    }

    #[test]
    fn monthly_nth_weekday() {
        let spec = RecurrenceSpec::new(Frequency::Monthly, date(2024, 1, 1)).with_nth_weekday(2, 2);
        assert_eq!(
            Summary::of(&spec).on.as_deref(),
            Some("The 2nd Tuesday of the month")
        );
    }

    #[test]
    fn monthly_day_of_month() {
        let spec = RecurrenceSpec::new(Frequency::Monthly, date(2024, 1, 1)).with_day_of_month(31);
        assert_eq!(Summary::of(&spec).on.as_deref(), Some("Day 31 of the month"));
    }

    #[test]
    fn open_ended_and_unset_bounds() {
        let summary = Summary::of(&RecurrenceSpec::default());
        assert_eq!(summary.starts, "Not set");
        assert_eq!(summary.ends, "Never");
    }

    #[test]
    fn display_renders_all_lines() {
        let spec = RecurrenceSpec::new(Frequency::Monthly, date(2024, 1, 31))
            .with_interval(2)
            .with_end(date(2024, 12, 31));
        assert_eq!(
            Summary::of(&spec).to_string(),
            "Frequency: Every 2 months.\n\
             On: Day 31 of the month.\n\
             Starts: January 31, 2024.\n\
             Ends: December 31, 2024."
        );
    }
}
