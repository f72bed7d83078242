use anyhow::Result;
use owo_colors::OwoColorize;
use recurdate_core::RecurrenceSpec;
use recurdate_core::summary::Summary;

pub fn run(spec: &RecurrenceSpec) -> Result<()> {
    let summary = Summary::of(spec);

    println!("{} {}.", "Frequency:".bold(), summary.frequency);
    if let Some(on) = &summary.on {
        println!("{} {}.", "On:".bold(), on);
    }
    println!("{} {}.", "Starts:".bold(), summary.starts);
    println!("{} {}.", "Ends:".bold(), summary.ends);

    Ok(())
}
