mod commands;
mod gemini;
mod render;
mod rule_args;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recurdate_core::config::RecurdateConfig;
use rule_args::RuleArgs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recurdate")]
#[command(about = "Preview, describe and get task ideas for recurring date rules")]
struct Cli {
    /// Show debug logs on stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the dates a rule produces
    Expand {
        #[command(flatten)]
        rule: RuleArgs,

        /// Print a JSON array instead of one date per line
        #[arg(long)]
        json: bool,

        /// Only print the first N dates
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show a month calendar with the rule's dates highlighted
    Preview {
        #[command(flatten)]
        rule: RuleArgs,

        /// First month to show (YYYY-MM), defaults to the start date's month
        #[arg(long)]
        month: Option<String>,

        /// How many months to show (defaults to preview_months from config)
        #[arg(long)]
        months: Option<u32>,
    },
    /// Describe a rule in words
    Summary {
        #[command(flatten)]
        rule: RuleArgs,
    },
    /// Print the task-suggestion prompt for a rule without sending it
    Prompt {
        #[command(flatten)]
        rule: RuleArgs,
    },
    /// Ask a text model for recurring tasks that fit a rule
    Suggest {
        #[command(flatten)]
        rule: RuleArgs,
    },
    /// Show configuration paths and effective values
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = RecurdateConfig::load()?;

    match cli.command {
        Commands::Expand { rule, json, limit } => {
            let spec = rule.to_spec(&config)?;
            commands::expand::run(&spec, json, limit)
        }
        Commands::Preview {
            rule,
            month,
            months,
        } => {
            let spec = rule.to_spec(&config)?;
            let months = months.unwrap_or(config.preview_months);
            commands::preview::run(&spec, month.as_deref(), months)
        }
        Commands::Summary { rule } => {
            let spec = rule.to_spec(&config)?;
            commands::summary::run(&spec)
        }
        Commands::Prompt { rule } => {
            let spec = rule.to_spec(&config)?;
            commands::prompt::run(&spec)
        }
        Commands::Suggest { rule } => {
            let spec = rule.to_spec(&config)?;
            commands::suggest::run(&spec, &config).await
        }
        Commands::Config => commands::config::run(&config),
    }
}

/// Logs go to stderr so `expand --json` output stays clean.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "recurdate=debug,recurdate_core=debug"
    } else {
        "recurdate=warn,recurdate_core=warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
