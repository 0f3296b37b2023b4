mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, HistoryAction};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let api_url = cli.api_url.as_deref();

    match cli.command {
        Commands::Predict {
            text,
            explain,
            no_history,
        } => commands::predict::run(&text, explain, no_history, api_url),
        Commands::Batch { file, name, out } => {
            commands::batch::run(&file, name.as_deref(), out.as_deref(), api_url)
        }
        Commands::History { action } => match action.unwrap_or(HistoryAction::List { limit: 20 }) {
            HistoryAction::List { limit } => commands::history::run_list(limit),
            HistoryAction::Stats => commands::history::run_stats(),
            HistoryAction::Search { query } => commands::history::run_search(&query),
            HistoryAction::Filter {
                sentiment,
                from,
                to,
            } => commands::history::run_filter(sentiment.as_deref(), from.as_deref(), to.as_deref()),
            HistoryAction::Remove { id } => commands::history::run_remove(id),
            HistoryAction::Clear => commands::history::run_clear(),
            HistoryAction::Export { out } => commands::history::run_export(out.as_deref()),
            HistoryAction::Import { file } => commands::history::run_import(&file),
            HistoryAction::Info => commands::history::run_info(),
        },
        Commands::Explain { text } => commands::explain::run(&text),
        Commands::Metrics { threshold } => commands::metrics::run(threshold, api_url),
        Commands::Dataset => commands::dataset::run(api_url),
        Commands::Theme { name } => commands::theme::run(name.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
