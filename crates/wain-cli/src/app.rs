//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wain")]
#[command(
    author,
    version,
    about = "Places discovery for Riyadh: Arabic search, occasions, rankings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a places JSON file, replacing the catalog
    Import(ImportArgs),

    /// Arabic-aware full-text search
    Search(SearchArgs),

    /// Occasion recommendations (romantic, family, business, friends, quiet)
    Recommend(RecommendArgs),

    /// List places with filters
    Ls(LsArgs),

    /// Trending (hot + new) places
    Trending(TrendingArgs),

    /// Neighborhoods with place counts
    Neighborhoods,

    /// Show index status
    Status,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Cli,
    /// JSON
    Json,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Path to the places JSON file
    pub file: PathBuf,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search query (joined with spaces)
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Results per page
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Re-rank the page by composite relevance around this latitude
    #[arg(long, requires = "lng")]
    pub lat: Option<f64>,

    /// Longitude for relevance re-ranking
    #[arg(long, requires = "lat")]
    pub lng: Option<f64>,
}

#[derive(Args)]
pub struct RecommendArgs {
    /// Occasion label
    pub occasion: String,

    /// Results per page
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Args)]
pub struct LsArgs {
    /// Filter by category (Arabic label)
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by neighborhood (Arabic label)
    #[arg(long)]
    pub neighborhood: Option<String>,

    /// Filter by price tier ($, $$, $$$, $$$$)
    #[arg(long)]
    pub price: Option<String>,

    /// Minimum rating (0-5)
    #[arg(long)]
    pub rating_min: Option<f64>,

    /// Only free places
    #[arg(long)]
    pub free: bool,

    /// Results per page
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Args)]
pub struct TrendingArgs {
    /// Places per list
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}
