//! Wain Core Library
//!
//! Core functionality for wain, a places-discovery engine for Riyadh.
//!
//! # Features
//! - Arabic-aware full-text search via SQLite FTS5 with a substring fallback
//! - Keyword-based intent extraction (category, occasion, neighborhood, price)
//! - Occasion recommendations over tag and category matches
//! - Composite relevance ranking (rating + trending + recency + distance)
//! - In-memory TTL cache for result pages

pub mod cache;
pub mod db;
pub mod error;
pub mod occasions;
pub mod page;
pub mod ranking;
pub mod search;

pub use cache::{occasion_cache_key, search_cache_key, TtlCache};
pub use db::{Database, IndexStats, NeighborhoodInfo, Place, PlaceFilter, PriceLevel};
pub use error::{Error, Result, WainError};
pub use occasions::Occasion;
pub use page::{OccasionPage, PlacePage, TrendingLists};
pub use ranking::{rank_places, score_place, GeoPoint};
pub use search::{build_fts_query, extract_intent, normalize, Intent, QueryIntent, SearchHits};

/// Upper bound applied to every limit parameter
pub const MAX_LIMIT: usize = 100;

/// Clamp policy for page sizes: the core never fails on an out-of-range
/// limit, it clamps to 1..=MAX_LIMIT
pub(crate) fn clamp_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_LIMIT)
}
