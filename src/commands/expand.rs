use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use recurdate_core::{RecurrenceSpec, expand};

pub fn run(spec: &RecurrenceSpec, json: bool, limit: Option<usize>) -> Result<()> {
    let series = expand(spec);
    let shown = limit.unwrap_or(series.len()).min(series.len());
    let dates = &series.as_slice()[..shown];

    if json {
        let out = serde_json::to_string_pretty(dates).context("Failed to serialize dates")?;
        println!("{}", out);
        return Ok(());
    }

    if dates.is_empty() {
        println!("{}", "No occurrences".dimmed());
        return Ok(());
    }

    for date in dates {
        println!("{}", date.format("%Y-%m-%d"));
    }

    if shown < series.len() {
        println!(
            "{}",
            format!("... {} more", series.len() - shown).dimmed()
        );
    }

    Ok(())
}
