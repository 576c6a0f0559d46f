//! Result envelopes consumed by the HTTP/CLI layer

use crate::db::Place;
use serde::Serialize;

/// A page of places with pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct PlacePage {
    pub places: Vec<Place>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub has_next: bool,
}

impl PlacePage {
    /// Build a page envelope; `page` is 1-based
    pub fn new(places: Vec<Place>, total: usize, page: usize, limit: usize) -> Self {
        let page = page.max(1);
        Self {
            places,
            total,
            page,
            limit,
            has_next: page * limit < total,
        }
    }
}

/// Occasion recommendation envelope
#[derive(Debug, Clone, Serialize)]
pub struct OccasionPage {
    pub occasion: String,
    pub places: Vec<Place>,
    pub total: usize,
}

/// Trending views: currently-hot and newly-added places
#[derive(Debug, Clone, Serialize)]
pub struct TrendingLists {
    pub hot: Vec<Place>,
    pub new: Vec<Place>,
}
