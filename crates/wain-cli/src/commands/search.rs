//! Search command

use crate::app::{OutputFormat, SearchArgs};
use crate::output::print_place_page;
use anyhow::Result;
use wain_core::{rank_places, Database, GeoPoint, PlacePage};

pub fn run(args: SearchArgs, db: &Database, format: OutputFormat) -> Result<()> {
    let query = args.query.join(" ");
    let limit = args.limit.clamp(1, wain_core::MAX_LIMIT);
    let page_number = args.page.max(1);
    let offset = (page_number - 1) * limit;

    let (mut places, total) = db.search_places(&query, limit, offset)?;

    // With a user location, re-rank the page by the composite score instead
    // of the engine's relevance order
    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        places = rank_places(places, Some(GeoPoint { lat, lng }));
    }

    let page = PlacePage::new(places, total, page_number, limit);
    print_place_page(&page, format)
}
