use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sentiq")]
#[command(version)]
#[command(about = "Command-line client for the movie-review sentiment API")]
pub struct Cli {
    /// Base URL of the sentiment API (overrides SENTIQ_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict sentiment for a single review
    Predict {
        /// Review text
        text: String,

        /// Show the word-importance breakdown after the result
        #[arg(long)]
        explain: bool,

        /// Do not record the result in history
        #[arg(long)]
        no_history: bool,
    },

    /// Predict sentiment for a CSV file of reviews
    Batch {
        /// CSV file with a `text` column (or one review per line)
        file: String,

        /// Name for the history entry
        #[arg(short, long)]
        name: Option<String>,

        /// Write per-review results to a CSV file
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Inspect and manage prediction history
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Score word importance locally (keyword heuristic, no API call)
    Explain {
        /// Review text
        text: String,
    },

    /// Fetch model evaluation metrics
    Metrics {
        /// Decision threshold for re-classification
        #[arg(short, long, default_value_t = 0.5)]
        threshold: f64,
    },

    /// Fetch dataset statistics and sample rows
    Dataset,

    /// Show or set the stored theme preference
    Theme {
        /// `light` or `dark`; omit to show the current theme
        name: Option<String>,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List recent records
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Show aggregate statistics
    Stats,

    /// Search record text and batch names
    Search { query: String },

    /// Filter records by sentiment and/or date range
    Filter {
        /// positive, negative, 1 or 0
        #[arg(short, long)]
        sentiment: Option<String>,

        /// Inclusive start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Inclusive end date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Remove a record by id
    Remove { id: i64 },

    /// Delete all history
    Clear,

    /// Export history to a JSON file
    Export {
        /// Output path (default: sentiment_history_<date>.json)
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Import and merge history from a JSON file
    Import { file: String },

    /// Show storage usage
    Info,
}
