//! Import command

use crate::app::ImportArgs;
use anyhow::{Context, Result};
use wain_core::{Database, Place};

pub fn run(args: ImportArgs, db: &Database) -> Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let places: Vec<Place> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", args.file.display()))?;

    let count = db.import_places(&places)?;
    println!("Imported {count} places");
    Ok(())
}
