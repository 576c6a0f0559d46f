//! Output formatters

use crate::app::OutputFormat;
use anyhow::Result;
use wain_core::{OccasionPage, Place, PlacePage, TrendingLists};

fn place_line(place: &Place) -> String {
    let rating = place
        .rating
        .map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| " - ".to_string());
    let price = place
        .price_level
        .map(|p| format!(" {p}"))
        .unwrap_or_default();
    let mut flags = String::new();
    if place.trending {
        flags.push_str(" [hot]");
    }
    if place.is_new {
        flags.push_str(" [new]");
    }
    format!(
        "{rating} {} ({}) - {}, {}{price}{flags}",
        place.name_ar, place.name_en, place.category, place.neighborhood
    )
}

pub fn print_place_page(page: &PlacePage, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(page)?),
        OutputFormat::Cli => {
            for place in &page.places {
                println!("{}", place_line(place));
            }
            println!();
            println!(
                "{} of {} (page {}{})",
                page.places.len(),
                page.total,
                page.page,
                if page.has_next { ", more available" } else { "" }
            );
        }
    }
    Ok(())
}

pub fn print_occasion_page(page: &OccasionPage, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(page)?),
        OutputFormat::Cli => {
            println!("Occasion: {}", page.occasion);
            for place in &page.places {
                println!("{}", place_line(place));
            }
            println!();
            println!("{} of {}", page.places.len(), page.total);
        }
    }
    Ok(())
}

pub fn print_trending(lists: &TrendingLists, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(lists)?),
        OutputFormat::Cli => {
            println!("Hot right now:");
            for place in &lists.hot {
                println!("  {}", place_line(place));
            }
            println!();
            println!("Newly added:");
            for place in &lists.new {
                println!("  {}", place_line(place));
            }
        }
    }
    Ok(())
}
