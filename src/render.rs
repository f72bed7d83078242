//! TUI rendering for recurdate types.
//!
//! Adds colored terminal output on top of recurdate-core types using owo_colors.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use recurdate_core::OccurrenceSeries;
use recurdate_core::calendar::{days_in_month, month_name, weekday_index};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// How a single day cell is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMark {
    Plain,
    Recurring,
    Start,
    End,
    /// Start date, end date and an occurrence all at once.
    StartEndRecurring,
}

impl DayMark {
    fn paint(&self, text: &str) -> String {
        match self {
            DayMark::Plain => text.to_string(),
            DayMark::Recurring => text.blue().to_string(),
            DayMark::Start => text.green().bold().to_string(),
            DayMark::End => text.red().bold().to_string(),
            DayMark::StartEndRecurring => text.magenta().bold().to_string(),
        }
    }
}

/// One month of the preview calendar, Sunday first.
pub struct MonthGrid<'a> {
    pub year: i32,
    pub month: u32,
    pub series: &'a OccurrenceSeries,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl MonthGrid<'_> {
    pub fn mark(&self, date: NaiveDate) -> DayMark {
        let recurring = self.series.contains(date);
        let is_start = self.start == Some(date);
        let is_end = self.end == Some(date);

        if recurring && is_start && is_end {
            DayMark::StartEndRecurring
        } else if is_end {
            DayMark::End
        } else if is_start {
            DayMark::Start
        } else if recurring {
            DayMark::Recurring
        } else {
            DayMark::Plain
        }
    }

    /// Rows of day numbers; `None` pads cells outside the month.
    pub fn weeks(&self) -> Vec<[Option<u32>; 7]> {
        let mut weeks = Vec::new();
        let Some(first) = NaiveDate::from_ymd_opt(self.year, self.month, 1) else {
            return weeks;
        };

        let mut row = [None; 7];
        let mut column = usize::from(weekday_index(first));

        for day in 1..=days_in_month(self.year, self.month) {
            row[column] = Some(day);
            column += 1;
            if column == 7 {
                weeks.push(row);
                row = [None; 7];
                column = 0;
            }
        }

        if column > 0 {
            weeks.push(row);
        }

        weeks
    }
}

impl Render for MonthGrid<'_> {
    fn render(&self) -> String {
        let title = format!("{} {}", month_name(self.month).unwrap_or("?"), self.year);
        let mut lines = vec![
            format!("{:^20}", title).bold().to_string(),
            "Su Mo Tu We Th Fr Sa".dimmed().to_string(),
        ];

        for week in self.weeks() {
            let cells: Vec<String> = week
                .iter()
                .map(|cell| match cell {
                    Some(day) => {
                        let text = format!("{:>2}", day);
                        match NaiveDate::from_ymd_opt(self.year, self.month, *day) {
                            Some(date) => self.mark(date).paint(&text),
                            None => text,
                        }
                    }
                    None => "  ".to_string(),
                })
                .collect();
            lines.push(cells.join(" ").trim_end().to_string());
        }

        lines.join("\n")
    }
}

/// One-line key for the highlight colors.
pub fn legend() -> String {
    format!(
        "{}  {}  {}",
        "■ recurring".blue(),
        "■ start".green(),
        "■ end".red()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use recurdate_core::{Frequency, RecurrenceSpec, expand};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn grid(series: &OccurrenceSeries, start: NaiveDate, end: Option<NaiveDate>) -> MonthGrid<'_> {
        MonthGrid {
            year: 2024,
            month: 1,
            series,
            start: Some(start),
            end,
        }
    }

    // --- layout ---

    #[test]
    fn january_2024_starts_on_monday() {
        let series = OccurrenceSeries::default();
        let weeks = grid(&series, date(2024, 1, 1), None).weeks();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], None);
        assert_eq!(weeks[0][1], Some(1));
        assert_eq!(weeks[0][6], Some(6));
        assert_eq!(weeks[4][3], Some(31));
        assert_eq!(weeks[4][4], None);
    }

    #[test]
    fn february_2015_fits_four_rows() {
        let series = OccurrenceSeries::default();
        let feb = MonthGrid {
            year: 2015,
            month: 2,
            series: &series,
            start: None,
            end: None,
        };
        let weeks = feb.weeks();
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0][0], Some(1));
        assert_eq!(weeks[3][6], Some(28));
    }

    #[test]
    fn invalid_month_has_no_rows() {
        let series = OccurrenceSeries::default();
        let bad = MonthGrid {
            year: 2024,
            month: 13,
            series: &series,
            start: None,
            end: None,
        };
        assert!(bad.weeks().is_empty());
    }

    // --- marks ---

    #[test]
    fn marks_follow_series_and_bounds() {
        let spec = RecurrenceSpec::new(Frequency::Weekly, date(2024, 1, 1))
            .with_days_of_week([1])
            .with_end(date(2024, 1, 31));
        let series = expand(&spec);
        let g = grid(&series, date(2024, 1, 1), Some(date(2024, 1, 31)));

        assert_eq!(g.mark(date(2024, 1, 1)), DayMark::Start);
        assert_eq!(g.mark(date(2024, 1, 8)), DayMark::Recurring);
        assert_eq!(g.mark(date(2024, 1, 9)), DayMark::Plain);
        assert_eq!(g.mark(date(2024, 1, 31)), DayMark::End);
    }

    #[test]
    fn single_day_rule_marks_all_three() {
        let spec = RecurrenceSpec::new(Frequency::Daily, date(2024, 1, 5)).with_end(date(2024, 1, 5));
        let series = expand(&spec);
        let g = grid(&series, date(2024, 1, 5), Some(date(2024, 1, 5)));
        assert_eq!(g.mark(date(2024, 1, 5)), DayMark::StartEndRecurring);
    }

    #[test]
    fn render_has_title_header_and_weeks() {
        let series = OccurrenceSeries::default();
        let rendered = grid(&series, date(2024, 1, 1), None).render();
        assert!(rendered.contains("January 2024"));
        assert!(rendered.contains("Su Mo Tu We Th Fr Sa"));
        assert_eq!(rendered.lines().count(), 2 + 5);
    }
}
