//! List command

use crate::app::{LsArgs, OutputFormat};
use crate::output::print_place_page;
use anyhow::Result;
use wain_core::{Database, PlaceFilter, PlacePage, PriceLevel};

pub fn run(args: LsArgs, db: &Database, format: OutputFormat) -> Result<()> {
    let price = args
        .price
        .as_deref()
        .map(|p| p.parse::<PriceLevel>())
        .transpose()?;

    let filter = PlaceFilter {
        category: args.category,
        neighborhood: args.neighborhood,
        price,
        rating_min: args.rating_min,
        is_free: args.free.then_some(true),
    };

    let limit = args.limit.clamp(1, wain_core::MAX_LIMIT);
    let page_number = args.page.max(1);
    let offset = (page_number - 1) * limit;
    let (places, total) = db.list_places(&filter, limit, offset)?;

    let page = PlacePage::new(places, total, page_number, limit);
    print_place_page(&page, format)
}
