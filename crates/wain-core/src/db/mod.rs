//! Database layer for wain
//!
//! Provides SQLite-based storage with:
//! - A typed `places` catalog decoded once at the store boundary
//! - An FTS5 projection kept in sync by triggers
//! - Filtered scans, trending views and neighborhood stats

mod places;
mod schema;
mod stats;

pub use places::{Place, PlaceFilter, PriceLevel};
pub(crate) use places::{occasion_block, place_from_row};
pub use schema::Database;
pub use stats::{IndexStats, NeighborhoodInfo};
use std::path::PathBuf;

/// Directory under the user cache dir holding the index
pub const CACHE_DIR_NAME: &str = "wain";

impl Database {
    /// Get the default database path
    pub fn default_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CACHE_DIR_NAME)
            .join("places.sqlite")
    }
}
