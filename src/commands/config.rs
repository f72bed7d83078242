use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use recurdate_core::config::RecurdateConfig;

pub fn run(config: &RecurdateConfig) -> Result<()> {
    let config_path = RecurdateConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!();

    // Never echo the key itself
    let mut shown = config.clone();
    shown.suggest.api_key = shown.suggest.api_key.map(|key| mask_key(&key));

    let values = toml::to_string_pretty(&shown).context("Failed to serialize config")?;
    println!("{}", "Effective values".bold());
    for line in values.lines() {
        println!("  {}", line);
    }

    Ok(())
}

/// Keep the last four characters of a key, hide the rest.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}
