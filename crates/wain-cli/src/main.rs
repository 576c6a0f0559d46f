//! Wain CLI
//!
//! Places discovery for Riyadh: import a catalog, search it in Arabic,
//! and get occasion-based recommendations.

use anyhow::Result;
use clap::Parser;
use wain_core::Database;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    // Open database (use WAIN_DB env var if set, otherwise use default)
    let db_path = std::env::var("WAIN_DB")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| Database::default_path());
    let db = Database::open(&db_path)?;
    db.initialize()?;

    match cli.command {
        Commands::Import(args) => commands::import::run(args, &db),
        Commands::Search(args) => commands::search::run(args, &db, cli.format),
        Commands::Recommend(args) => commands::recommend::run(args, &db, cli.format),
        Commands::Ls(args) => commands::ls::run(args, &db, cli.format),
        Commands::Trending(args) => commands::trending::run(args, &db, cli.format),
        Commands::Neighborhoods => commands::neighborhoods::run(&db, cli.format),
        Commands::Status => commands::status::run(&db, cli.format),
    }
}
