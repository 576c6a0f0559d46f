//! Trending command

use crate::app::{OutputFormat, TrendingArgs};
use crate::output::print_trending;
use anyhow::Result;
use wain_core::{Database, TrendingLists};

pub fn run(args: TrendingArgs, db: &Database, format: OutputFormat) -> Result<()> {
    let (hot, new) = db.trending(args.limit)?;
    print_trending(&TrendingLists { hot, new }, format)
}
