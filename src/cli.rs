//! Command-line interface definitions for the `newsapi` binary.
//!
//! The API key can be given with `--api-key`, through the `NEWSAPI_KEY`
//! environment variable, or as `api_key` in the `--config` file. The flag
//! (or variable) wins when both are present.

use clap::{Parser, Subcommand};

/// Query the newsapi.org v2 API from the command line.
///
/// # Examples
///
/// ```sh
/// # Top headlines as JSON
/// NEWSAPI_KEY=... newsapi --json headlines
///
/// # Search with a config file pointing at a proxy
/// newsapi --config ./newsapi.yaml search "open source"
///
/// # Filtered headlines
/// newsapi headlines --country gb --page-size 5
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// newsapi.org API key; overrides `api_key` from the config file
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Optional path to a YAML client config
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print records as pretty JSON instead of one line each
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Default news feed
    News,
    /// Everything endpoint, unfiltered
    Everything,
    /// Top headlines, optionally filtered
    Headlines {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        sort_by: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Available sources
    Sources,
    /// Latest articles from one source
    Latest { source: String },
    /// Free-text search
    Search { query: String },
    /// Search by category keyword
    Category { category: String },
    /// Search by language code
    Language { language: String },
    /// Search by country code
    Country { country: String },
}
