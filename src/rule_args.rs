//! Command-line flags describing a recurrence rule.

use std::collections::BTreeSet;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use recurdate_core::calendar::parse_weekday;
use recurdate_core::config::RecurdateConfig;
use recurdate_core::{DailyStep, Frequency, MonthlyMode, RecurrenceSpec};
use tracing::warn;

use crate::utils::date_input::parse_date;

#[derive(Args, Debug)]
pub struct RuleArgs {
    /// How often the rule repeats: daily, weekly, monthly or yearly
    #[arg(short, long, default_value = "daily")]
    pub frequency: Frequency,

    /// Repeat every N days/weeks/months/years (values below 1 count as 1)
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub interval: i64,

    /// First possible date (e.g., "2025-03-20" or "next monday"), defaults to today
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last possible date, inclusive
    #[arg(short, long)]
    pub end: Option<String>,

    /// Weekly: days to repeat on (e.g., "mon,wed" or "1,3" with Sunday = 0)
    #[arg(short, long, value_delimiter = ',')]
    pub days: Vec<String>,

    /// Monthly: "day" for a fixed day of the month, "nth" for the nth weekday
    #[arg(long)]
    pub monthly: Option<MonthlyMode>,

    /// Monthly: day of the month (clamped to the last day of shorter months)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=31))]
    pub day_of_month: Option<u32>,

    /// Monthly: which occurrence of the weekday (1 = first .. 5 = fifth)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=5))]
    pub nth: Option<u32>,

    /// Monthly: weekday for --nth (e.g., "tuesday")
    #[arg(long)]
    pub weekday: Option<String>,

    /// Daily: step by the interval instead of every day
    #[arg(long)]
    pub daily_interval: bool,
}

impl RuleArgs {
    pub fn to_spec(&self, config: &RecurdateConfig) -> Result<RecurrenceSpec> {
        self.to_spec_from(config, Local::now().date_naive())
    }

    /// Build the rule, resolving a missing start date to `today`.
    ///
    /// Monthly qualifiers that aren't given default from the start date.
    fn to_spec_from(&self, config: &RecurdateConfig, today: NaiveDate) -> Result<RecurrenceSpec> {
        let start = match &self.start {
            Some(s) => parse_date(s)?,
            None => today,
        };

        let mut end = self.end.as_deref().map(parse_date).transpose()?;
        if let Some(e) = end
            && e < start
        {
            warn!(%start, end = %e, "End date is before start date, ignoring it");
            end = None;
        }

        let days_of_week = self
            .days
            .iter()
            .filter(|d| !d.trim().is_empty())
            .map(|d| parse_weekday(d))
            .collect::<Result<BTreeSet<u8>, _>>()?;

        if self.frequency == Frequency::Weekly && days_of_week.is_empty() {
            warn!("Weekly rule has no days selected (--days), it will never match");
        }

        let mut spec = RecurrenceSpec::new(self.frequency, start);
        spec.interval = u32::try_from(self.interval.max(1)).unwrap_or(u32::MAX);
        spec.end = end;
        spec.days_of_week = days_of_week;

        spec.monthly_mode = self.monthly.unwrap_or(if self.nth.is_some() || self.weekday.is_some() {
            MonthlyMode::NthWeekday
        } else {
            MonthlyMode::DayOfMonth
        });
        if let Some(day) = self.day_of_month {
            spec.day_of_month = day;
        }
        if let Some(nth) = self.nth {
            spec.nth = nth;
        }
        if let Some(weekday) = &self.weekday {
            spec.weekday_in_month = parse_weekday(weekday)?;
        }

        spec.daily_step = if self.daily_interval {
            DailyStep::Interval
        } else {
            config.daily_step()
        };

        Ok(spec)
    }
}
