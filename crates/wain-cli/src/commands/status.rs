//! Status command

use crate::app::OutputFormat;
use anyhow::Result;
use wain_core::Database;

pub fn run(db: &Database, format: OutputFormat) -> Result<()> {
    let stats = db.stats()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Cli => {
            println!("Places:          {}", stats.place_count);
            println!("FTS rows:        {}", stats.fts_count);
            println!("Trending:        {}", stats.trending_count);
            println!("New:             {}", stats.new_count);
            println!(
                "Schema version:  {}",
                stats
                    .schema_version
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string())
            );
        }
    }
    Ok(())
}
