//! Place records and catalog operations

use super::Database;
use crate::error::{Result, WainError};
use crate::occasions::Occasion;
use crate::search::QueryIntent;
use chrono::Utc;
use rusqlite::types::Type;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Price tier, ordered from cheapest to most expensive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceLevel {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Upscale => "$$$",
            Self::Luxury => "$$$$",
        }
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceLevel {
    type Err = WainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "$" => Ok(Self::Budget),
            "$$" => Ok(Self::Moderate),
            "$$$" => Ok(Self::Upscale),
            "$$$$" => Ok(Self::Luxury),
            other => Err(WainError::InvalidInput(format!(
                "invalid price level: {other}"
            ))),
        }
    }
}

/// A venue in the catalog. Decoded once at the store boundary; the serving
/// core never mutates a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name_ar: String,
    pub name_en: String,
    pub category: String,
    #[serde(default)]
    pub category_en: String,
    pub neighborhood: String,
    #[serde(default)]
    pub neighborhood_en: String,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default, alias = "google_rating")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub price_level: Option<PriceLevel>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub trending: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default, alias = "google_maps_url")]
    pub maps_url: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub perfect_for: Vec<String>,
    #[serde(default)]
    pub audience: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Conjunctive filter for catalog scans
#[derive(Debug, Clone, Default)]
pub struct PlaceFilter {
    pub category: Option<String>,
    pub neighborhood: Option<String>,
    pub price: Option<PriceLevel>,
    pub rating_min: Option<f64>,
    pub is_free: Option<bool>,
}

/// Decode a JSON-array column, failing loudly on corrupt data
fn json_list(row: &Row, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Decode one `SELECT * FROM places` row into a typed Place
pub(crate) fn place_from_row(row: &Row) -> rusqlite::Result<Place> {
    let price_level = match row.get::<_, Option<String>>(10)? {
        Some(raw) => Some(PriceLevel::from_str(&raw).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(e))
        })?),
        None => None,
    };

    Ok(Place {
        id: row.get(0)?,
        name_ar: row.get(1)?,
        name_en: row.get(2)?,
        category: row.get(3)?,
        category_en: row.get(4)?,
        neighborhood: row.get(5)?,
        neighborhood_en: row.get(6)?,
        description_ar: row.get(7)?,
        district: row.get(8)?,
        rating: row.get(9)?,
        price_level,
        price_range: row.get(11)?,
        trending: row.get(12)?,
        is_new: row.get(13)?,
        is_free: row.get(14)?,
        lat: row.get(15)?,
        lng: row.get(16)?,
        maps_url: row.get(17)?,
        opening_hours: row.get(18)?,
        tags: json_list(row, 19)?,
        perfect_for: json_list(row, 20)?,
        audience: json_list(row, 21)?,
        sources: json_list(row, 22)?,
    })
}

impl Database {
    /// Insert or replace a single place. The FTS projection is regenerated
    /// by triggers.
    pub fn insert_place(&self, place: &Place) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO places
             (id, name_ar, name_en, category, category_en, neighborhood, neighborhood_en,
              description_ar, district, rating, price_level, price_range, trending, is_new,
              is_free, lat, lng, maps_url, opening_hours, tags, perfect_for, audience,
              sources, imported_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15,
                     ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24)",
            params![
                place.id,
                place.name_ar,
                place.name_en,
                place.category,
                place.category_en,
                place.neighborhood,
                place.neighborhood_en,
                place.description_ar,
                place.district,
                place.rating,
                place.price_level.map(|p| p.as_str()),
                place.price_range,
                place.trending,
                place.is_new,
                place.is_free,
                place.lat,
                place.lng,
                place.maps_url,
                place.opening_hours,
                serde_json::to_string(&place.tags)?,
                serde_json::to_string(&place.perfect_for)?,
                serde_json::to_string(&place.audience)?,
                serde_json::to_string(&place.sources)?,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Wipe-and-reload bulk import, all inside one transaction
    pub fn import_places(&self, places: &[Place]) -> Result<usize> {
        for place in places {
            if place.id.is_empty() {
                return Err(WainError::InvalidInput(
                    "place with empty id in import data".to_string(),
                ));
            }
            if let Some(rating) = place.rating {
                if !(0.0..=5.0).contains(&rating) {
                    return Err(WainError::InvalidInput(format!(
                        "place {} has rating {rating} outside [0, 5]",
                        place.id
                    )));
                }
            }
        }

        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM places", [])?;
        for place in places {
            self.insert_place(place)?;
        }
        tx.commit()?;

        tracing::info!(count = places.len(), "imported places catalog");
        Ok(places.len())
    }

    /// Get a single place by id
    pub fn get_place(&self, id: &str) -> Result<Place> {
        let mut stmt = self.conn.prepare("SELECT * FROM places WHERE id = ?1")?;
        let mut rows = stmt.query_map(params![id], place_from_row)?;
        match rows.next() {
            Some(row) => Ok(row?),
            None => Err(WainError::PlaceNotFound(id.to_string())),
        }
    }

    /// Filtered catalog scan, rating descending, with true total count
    pub fn list_places(
        &self,
        filter: &PlaceFilter,
        limit: usize,
        offset: usize,
    ) -> Result<(Vec<Place>, usize)> {
        let limit = crate::clamp_limit(limit);
        let mut conditions: Vec<String> = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref category) = filter.category {
            conditions.push("category = ?".to_string());
            params_vec.push(Box::new(category.clone()));
        }
        if let Some(ref neighborhood) = filter.neighborhood {
            conditions.push("neighborhood = ?".to_string());
            params_vec.push(Box::new(neighborhood.clone()));
        }
        if let Some(price) = filter.price {
            conditions.push("price_level = ?".to_string());
            params_vec.push(Box::new(price.as_str()));
        }
        if let Some(rating_min) = filter.rating_min {
            conditions.push("rating >= ?".to_string());
            params_vec.push(Box::new(rating_min));
        }
        if let Some(is_free) = filter.is_free {
            conditions.push("is_free = ?".to_string());
            params_vec.push(Box::new(is_free));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let total: usize = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM places {where_clause}"),
            rusqlite::params_from_iter(params_vec.iter().map(|p| p.as_ref())),
            |row| row.get(0),
        )?;

        params_vec.push(Box::new(limit as i64));
        params_vec.push(Box::new(offset as i64));
        let mut stmt = self.conn.prepare(&format!(
            "SELECT * FROM places {where_clause} ORDER BY rating DESC LIMIT ? OFFSET ?"
        ))?;
        let places = stmt
            .query_map(
                rusqlite::params_from_iter(params_vec.iter().map(|p| p.as_ref())),
                place_from_row,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((places, total))
    }

    /// Structured query for an extracted intent: hard filters ANDed with the
    /// occasion's disjunctive keyword/category block
    pub fn places_for_intent(&self, intent: &QueryIntent, limit: usize) -> Result<Vec<Place>> {
        let limit = crate::clamp_limit(limit);
        let mut conditions: Vec<String> = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(category) = intent.category {
            conditions.push("category = ?".to_string());
            params_vec.push(Box::new(category));
        }
        if let Some(neighborhood) = intent.neighborhood {
            conditions.push("neighborhood = ?".to_string());
            params_vec.push(Box::new(neighborhood));
        }
        if let Some(price) = intent.price {
            conditions.push("price_level = ?".to_string());
            params_vec.push(Box::new(price.as_str()));
        }
        if let Some(occasion) = intent.occasion {
            let block = occasion_block(occasion, &mut params_vec);
            if !block.is_empty() {
                conditions.push(format!("({block})"));
            }
        }

        if conditions.is_empty() {
            return Ok(Vec::new());
        }

        params_vec.push(Box::new(limit as i64));
        let sql = format!(
            "SELECT * FROM places WHERE {} ORDER BY rating DESC LIMIT ?",
            conditions.join(" AND ")
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let places = stmt
            .query_map(
                rusqlite::params_from_iter(params_vec.iter().map(|p| p.as_ref())),
                place_from_row,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(places)
    }

    /// Trending views: hot (trending flag) and newly added places
    pub fn trending(&self, limit: usize) -> Result<(Vec<Place>, Vec<Place>)> {
        let limit = crate::clamp_limit(limit);
        let mut stmt = self.conn.prepare(
            "SELECT * FROM places WHERE trending = 1 ORDER BY rating DESC LIMIT ?1",
        )?;
        let hot = stmt
            .query_map(params![limit as i64], place_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = self
            .conn
            .prepare("SELECT * FROM places WHERE is_new = 1 ORDER BY rating DESC LIMIT ?1")?;
        let new = stmt
            .query_map(params![limit as i64], place_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((hot, new))
    }
}

/// Build the OR block for an occasion's keyword/category matches, appending
/// the bound parameters. Keyword matching is substring containment over the
/// stored JSON tag text, mirroring the recall-first occasion policy.
pub(crate) fn occasion_block(
    occasion: Occasion,
    params_vec: &mut Vec<Box<dyn rusqlite::ToSql>>,
) -> String {
    let mut conditions: Vec<&'static str> = Vec::new();

    for keyword in occasion.keywords() {
        conditions.push("perfect_for LIKE ?");
        params_vec.push(Box::new(format!("%{keyword}%")));
        conditions.push("audience LIKE ?");
        params_vec.push(Box::new(format!("%{keyword}%")));
    }
    for category in occasion.categories() {
        conditions.push("category = ?");
        params_vec.push(Box::new(*category));
    }

    conditions.join(" OR ")
}
