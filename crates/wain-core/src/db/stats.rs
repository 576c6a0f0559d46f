//! Index status and neighborhood stats

use super::Database;
use crate::error::Result;
use serde::Serialize;

/// Snapshot of the index state
#[derive(Debug, Serialize)]
pub struct IndexStats {
    pub place_count: usize,
    pub fts_count: usize,
    pub trending_count: usize,
    pub new_count: usize,
    pub schema_version: Option<i32>,
}

/// Neighborhood with its place count
#[derive(Debug, Clone, Serialize)]
pub struct NeighborhoodInfo {
    pub name: String,
    pub name_en: String,
    pub place_count: usize,
}

impl Database {
    /// Gather index statistics
    pub fn stats(&self) -> Result<IndexStats> {
        let place_count: usize =
            self.conn
                .query_row("SELECT COUNT(*) FROM places", [], |row| row.get(0))?;
        let fts_count: usize =
            self.conn
                .query_row("SELECT COUNT(*) FROM places_fts", [], |row| row.get(0))?;
        let trending_count: usize = self.conn.query_row(
            "SELECT COUNT(*) FROM places WHERE trending = 1",
            [],
            |row| row.get(0),
        )?;
        let new_count: usize =
            self.conn
                .query_row("SELECT COUNT(*) FROM places WHERE is_new = 1", [], |row| {
                    row.get(0)
                })?;

        Ok(IndexStats {
            place_count,
            fts_count,
            trending_count,
            new_count,
            schema_version: self.schema_version()?,
        })
    }

    /// Neighborhoods with place counts, busiest first
    pub fn neighborhoods(&self) -> Result<Vec<NeighborhoodInfo>> {
        let mut stmt = self.conn.prepare(
            "SELECT neighborhood, neighborhood_en, COUNT(*) as cnt
             FROM places WHERE neighborhood != ''
             GROUP BY neighborhood
             ORDER BY cnt DESC",
        )?;
        let infos = stmt
            .query_map([], |row| {
                Ok(NeighborhoodInfo {
                    name: row.get(0)?,
                    name_en: row.get(1)?,
                    place_count: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(infos)
    }
}
