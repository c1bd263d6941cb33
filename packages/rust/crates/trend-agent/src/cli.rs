use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trend-agent")]
#[command(
    about = "Collect AI tool listings, classify them, and recommend tools for a task. Pipeline, queries, or HTTP gateway."
)]
pub(crate) struct Cli {
    /// Override config directory (user settings live in `<conf>/tool-trends/settings.yaml`).
    #[arg(long, global = true)]
    pub(crate) conf: Option<PathBuf>,

    /// Catalog file (default: settings `store.path`).
    #[arg(long, global = true)]
    pub(crate) store: Option<PathBuf>,

    /// Debug logging (ignored when RUST_LOG is set).
    #[arg(long, short, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Collect, classify and store tools, then print the run report.
    Pipeline {
        /// Use the built-in sample dataset instead of live sources.
        #[arg(long)]
        sample: bool,

        /// Keyword classification only; no external service calls.
        #[arg(long)]
        no_llm: bool,

        /// Classify at most this many tools.
        #[arg(long)]
        max_tools: Option<usize>,
    },
    /// Recommend tools from the stored catalog for a task description.
    Recommend {
        #[arg(long)]
        task: String,
    },
    /// List stored tools, optionally filtered.
    Tools {
        /// Category label (`All` for no filter).
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive text in name, summary or description.
        #[arg(long)]
        search: Option<String>,
    },
    /// Tool count per category.
    Stats,
    /// Trend summary over the stored catalog.
    Trends,
    /// Categories present in the stored catalog.
    Categories,
    /// Run the HTTP gateway. Default bind: 0.0.0.0:8000
    Gateway {
        /// Listen address (e.g. 0.0.0.0:8000)
        #[arg(long)]
        bind: Option<String>,
    },
}
