//! Recommend command

use crate::app::{OutputFormat, RecommendArgs};
use crate::output::print_occasion_page;
use anyhow::Result;
use wain_core::{Database, Occasion, OccasionPage};

pub fn run(args: RecommendArgs, db: &Database, format: OutputFormat) -> Result<()> {
    let occasion: Occasion = args.occasion.parse()?;
    let limit = args.limit.clamp(1, wain_core::MAX_LIMIT);
    let page_number = args.page.max(1);
    let offset = (page_number - 1) * limit;

    let (places, total) = db.recommend(occasion, limit, offset)?;
    let page = OccasionPage {
        occasion: occasion.to_string(),
        places,
        total,
    };
    print_occasion_page(&page, format)
}
