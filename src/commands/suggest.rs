use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use recurdate_core::RecurrenceSpec;
use recurdate_core::config::RecurdateConfig;
use recurdate_core::suggest::suggest_tasks;

use crate::gemini::GeminiSuggester;
use crate::utils::tui::create_spinner;

pub async fn run(spec: &RecurrenceSpec, config: &RecurdateConfig) -> Result<()> {
    let suggester = GeminiSuggester::from_config(&config.suggest)?;

    let spinner = create_spinner("Generating suggestions...".to_string());
    let result = suggest_tasks(&suggester, spec).await;
    spinner.finish_and_clear();

    let suggestions = result.context("Failed to get suggestions")?;

    println!("{}", "Suggested Tasks:".bold());
    println!("{}", suggestions.trim_end());

    Ok(())
}
