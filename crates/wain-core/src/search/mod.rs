//! Search module
//!
//! Provides:
//! - Arabic text normalization for diacritic/hamza-insensitive matching
//! - FTS5 query building with prefix clauses
//! - Full-text search with a substring fallback scan
//! - Keyword-based intent extraction for the assistant front-end

mod engine;
mod intent;
mod normalize;
mod query;

pub use engine::SearchHits;
pub use intent::{extract_intent, Intent, QueryIntent};
pub use normalize::normalize;
pub use query::build_fts_query;
