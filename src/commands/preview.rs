use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use recurdate_core::calendar::first_of_month_after;
use recurdate_core::{RecurrenceSpec, expand};

use crate::render::{MonthGrid, Render, legend};
use crate::utils::date_input::parse_month;

pub fn run(spec: &RecurrenceSpec, month: Option<&str>, months: u32) -> Result<()> {
    let first = match month {
        Some(m) => parse_month(m)?,
        None => spec
            .start
            .unwrap_or_else(|| Local::now().date_naive())
            .with_day(1)
            .unwrap_or(NaiveDate::MIN),
    };

    let series = expand(spec);

    for offset in 0..months.max(1) {
        let Some(shown) = first_of_month_after(first, offset) else {
            break;
        };

        let grid = MonthGrid {
            year: shown.year(),
            month: shown.month(),
            series: &series,
            start: spec.start,
            end: spec.end,
        };

        println!("{}", grid.render());
        println!();
    }

    println!("{}", legend());

    Ok(())
}
