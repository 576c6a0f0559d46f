//! Full-text search with substring fallback

use super::{build_fts_query, normalize};
use crate::cache::{search_cache_key, TtlCache};
use crate::db::{place_from_row, Database, Place};
use crate::error::Result;
use rusqlite::params;
use tracing::debug;

/// A page of search hits plus the total match count
pub type SearchHits = (Vec<Place>, usize);

/// Denormalized fields scanned by the fallback; ?1 is the LIKE pattern
const FALLBACK_WHERE: &str = "name_ar LIKE ?1 OR name_en LIKE ?1 \
     OR description_ar LIKE ?1 OR category LIKE ?1 OR neighborhood LIKE ?1";

impl Database {
    /// Full-text search over the places catalog.
    ///
    /// Runs the query against the FTS5 index in engine relevance order; when
    /// the index reports zero matches, degrades to a substring scan over the
    /// denormalized text fields ordered by rating. Whitespace-only input
    /// returns an empty page without touching the store. The limit is
    /// clamped to 1..=MAX_LIMIT.
    pub fn search_places(&self, raw_text: &str, limit: usize, offset: usize) -> Result<SearchHits> {
        let limit = crate::clamp_limit(limit);
        let Some(expression) = build_fts_query(raw_text) else {
            return Ok((Vec::new(), 0));
        };

        let total: usize = self.conn.query_row(
            "SELECT COUNT(*) FROM places_fts WHERE places_fts MATCH ?1",
            params![expression],
            |row| row.get(0),
        )?;

        if total == 0 {
            debug!(query = raw_text, "no FTS matches, using substring fallback");
            return self.fallback_search(raw_text, limit, offset);
        }

        let mut stmt = self.conn.prepare(
            "SELECT p.* FROM places p
             JOIN places_fts fts ON fts.id = p.id
             WHERE places_fts MATCH ?1
             ORDER BY rank
             LIMIT ?2 OFFSET ?3",
        )?;
        let places = stmt
            .query_map(
                params![expression, limit as i64, offset as i64],
                place_from_row,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((places, total))
    }

    /// Cache-wrapped variant of [`search_places`](Self::search_places)
    pub fn search_places_cached(
        &self,
        cache: &TtlCache<SearchHits>,
        raw_text: &str,
        limit: usize,
        offset: usize,
    ) -> Result<SearchHits> {
        let limit = crate::clamp_limit(limit);
        let key = search_cache_key(raw_text, limit, offset);
        if let Some(hits) = cache.get(&key) {
            return Ok(hits);
        }
        let hits = self.search_places(raw_text, limit, offset)?;
        cache.set(key, hits.clone());
        Ok(hits)
    }

    /// Substring containment scan over the same fields, rating descending.
    /// Recovers results for input the tokenizer cannot match; only runs on
    /// the empty-result path.
    fn fallback_search(&self, raw_text: &str, limit: usize, offset: usize) -> Result<SearchHits> {
        let pattern = format!("%{}%", normalize(raw_text));

        let total: usize = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM places WHERE {FALLBACK_WHERE}"),
            params![pattern],
            |row| row.get(0),
        )?;

        let mut stmt = self.conn.prepare(&format!(
            "SELECT * FROM places WHERE {FALLBACK_WHERE}
             ORDER BY rating DESC
             LIMIT ?2 OFFSET ?3"
        ))?;
        let places = stmt
            .query_map(
                params![pattern, limit as i64, offset as i64],
                place_from_row,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((places, total))
    }
}
