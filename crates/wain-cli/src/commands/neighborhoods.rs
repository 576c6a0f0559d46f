//! Neighborhoods command

use crate::app::OutputFormat;
use anyhow::Result;
use wain_core::Database;

pub fn run(db: &Database, format: OutputFormat) -> Result<()> {
    let neighborhoods = db.neighborhoods()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&neighborhoods)?),
        OutputFormat::Cli => {
            for info in &neighborhoods {
                println!("{:>4}  {} ({})", info.place_count, info.name, info.name_en);
            }
        }
    }
    Ok(())
}
