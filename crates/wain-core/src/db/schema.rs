//! Database schema and initialization

use crate::error::Result;
use rusqlite::{params, Connection};
use std::path::Path;

/// Main database handle
pub struct Database {
    pub(crate) conn: Connection,
}

const SCHEMA_VERSION: i32 = 1;

const CREATE_TABLES: &str = r#"
-- Places catalog (read-only at serving time, populated by the importer)
CREATE TABLE IF NOT EXISTS places (
    id TEXT PRIMARY KEY,
    name_ar TEXT NOT NULL,
    name_en TEXT NOT NULL,
    category TEXT NOT NULL,
    category_en TEXT NOT NULL DEFAULT '',
    neighborhood TEXT NOT NULL,
    neighborhood_en TEXT NOT NULL DEFAULT '',
    description_ar TEXT,
    district TEXT,
    rating REAL,
    price_level TEXT,
    price_range TEXT,
    trending INTEGER NOT NULL DEFAULT 0,
    is_new INTEGER NOT NULL DEFAULT 0,
    is_free INTEGER NOT NULL DEFAULT 0,
    lat REAL,
    lng REAL,
    maps_url TEXT,
    opening_hours TEXT,
    tags TEXT NOT NULL DEFAULT '[]',
    perfect_for TEXT NOT NULL DEFAULT '[]',
    audience TEXT NOT NULL DEFAULT '[]',
    sources TEXT NOT NULL DEFAULT '[]',
    imported_at TEXT NOT NULL
);

-- Full-text search projection over the searchable text fields.
-- remove_diacritics=2 folds decomposed hamza/diacritic forms at the
-- tokenizer level; query-side normalization handles the rest.
CREATE VIRTUAL TABLE IF NOT EXISTS places_fts USING fts5(
    id UNINDEXED,
    name_ar,
    name_en,
    description_ar,
    tags,
    category,
    neighborhood,
    tokenize='unicode61 remove_diacritics 2'
);

-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_places_category ON places(category);
CREATE INDEX IF NOT EXISTS idx_places_neighborhood ON places(neighborhood);
CREATE INDEX IF NOT EXISTS idx_places_rating ON places(rating DESC);
CREATE INDEX IF NOT EXISTS idx_places_trending ON places(trending);
CREATE INDEX IF NOT EXISTS idx_places_is_new ON places(is_new);
CREATE INDEX IF NOT EXISTS idx_places_category_rating ON places(category, rating DESC);
CREATE INDEX IF NOT EXISTS idx_places_neighborhood_rating ON places(neighborhood, rating DESC);
"#;

const CREATE_TRIGGERS: &str = r#"
-- Sync FTS projection on insert. INSERT OR REPLACE fires the delete trigger
-- for the displaced row because recursive_triggers is on.
CREATE TRIGGER IF NOT EXISTS places_ai
AFTER INSERT ON places
BEGIN
    INSERT INTO places_fts(id, name_ar, name_en, description_ar, tags, category, neighborhood)
    VALUES (new.id, new.name_ar, new.name_en, new.description_ar, new.tags, new.category, new.neighborhood);
END;

-- Regenerate FTS projection whenever a source field changes
CREATE TRIGGER IF NOT EXISTS places_au
AFTER UPDATE ON places
BEGIN
    DELETE FROM places_fts WHERE id = old.id;
    INSERT INTO places_fts(id, name_ar, name_en, description_ar, tags, category, neighborhood)
    VALUES (new.id, new.name_ar, new.name_en, new.description_ar, new.tags, new.category, new.neighborhood);
END;

-- Sync FTS projection on delete
CREATE TRIGGER IF NOT EXISTS places_ad
AFTER DELETE ON places
BEGIN
    DELETE FROM places_fts WHERE id = old.id;
END;
"#;

impl Database {
    /// Open database at path, creating if necessary
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Initialize database schema
    pub fn initialize(&self) -> Result<()> {
        // Set PRAGMAs for performance
        self.conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA cache_size = -64000;
             PRAGMA busy_timeout = 5000;
             PRAGMA recursive_triggers = ON;",
        )?;

        self.conn.execute_batch(CREATE_TABLES)?;
        self.conn.execute_batch(CREATE_TRIGGERS)?;

        self.conn.execute(
            "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
            params![SCHEMA_VERSION],
        )?;

        Ok(())
    }

    /// Get current schema version, `None` when no version row exists yet
    pub fn schema_version(&self) -> Result<Option<i32>> {
        match self.conn.query_row(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            [],
            |row| row.get(0),
        ) {
            Ok(version) => Ok(Some(version)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
