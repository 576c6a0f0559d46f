//! Occasion-based recommendations
//!
//! An occasion page unions keyword matches over the free-form tag fields
//! with category matches, deliberately favoring recall so the page is
//! rarely empty.

use crate::cache::{occasion_cache_key, TtlCache};
use crate::db::{occasion_block, place_from_row, Database};
use crate::error::{Result, WainError};
use crate::search::SearchHits;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Social context of a visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Romantic,
    Family,
    Business,
    Friends,
    Quiet,
}

/// Keywords matched against perfect_for / audience tag text
static ROMANTIC_KEYWORDS: &[&str] = &[
    "رومانسي",
    "أجواء رومانسية",
    "عشاء رومانسي",
    "سهرة رومانسية",
    "أزواج",
    "عرسان",
];

static FAMILY_KEYWORDS: &[&str] = &[
    "عوائل",
    "عائلات",
    "أطفال",
    "نزهة عائلية",
    "جلسات عائلية",
    "حفلات أطفال",
    "أنشطة أطفال",
    "ملاهي أطفال",
    "مناسبة عائلية",
];

static BUSINESS_KEYWORDS: &[&str] = &[
    "أعمال",
    "عمل",
    "اجتماعات عمل",
    "غداء عمل",
    "مؤتمرات",
    "كافيه عمل",
    "كافيه دراسي",
];

static FRIENDS_KEYWORDS: &[&str] = &[
    "أصدقاء",
    "شباب",
    "تجمعات",
    "سهرة مع أصدقاء",
    "مزة مع أصدقاء",
    "غداء مع أصدقاء",
    "عشاء مع أصدقاء",
    "سهرة",
];

static QUIET_KEYWORDS: &[&str] = &[
    "هادي",
    "هدوء",
    "استرخاء",
    "كافيه هادئ",
    "سهرة هادئة",
    "قراءة",
    "دراسة",
];

impl Occasion {
    pub const ALL: [Occasion; 5] = [
        Occasion::Romantic,
        Occasion::Family,
        Occasion::Business,
        Occasion::Friends,
        Occasion::Quiet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Romantic => "romantic",
            Self::Family => "family",
            Self::Business => "business",
            Self::Friends => "friends",
            Self::Quiet => "quiet",
        }
    }

    /// Tag keywords associated with this occasion
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Romantic => ROMANTIC_KEYWORDS,
            Self::Family => FAMILY_KEYWORDS,
            Self::Business => BUSINESS_KEYWORDS,
            Self::Friends => FRIENDS_KEYWORDS,
            Self::Quiet => QUIET_KEYWORDS,
        }
    }

    /// Category hints for this occasion
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Self::Romantic => &["مطعم", "كافيه", "فنادق"],
            Self::Family => &["ترفيه", "مطعم", "طبيعة", "حدائق", "مولات"],
            Self::Business => &["كافيه", "مطعم", "فنادق"],
            Self::Friends => &["مطعم", "كافيه", "ترفيه", "رياضة"],
            Self::Quiet => &["كافيه", "طبيعة", "متاحف"],
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Occasion {
    type Err = WainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "romantic" => Ok(Self::Romantic),
            "family" => Ok(Self::Family),
            "business" => Ok(Self::Business),
            "friends" => Ok(Self::Friends),
            "quiet" => Ok(Self::Quiet),
            other => Err(WainError::InvalidOccasion(other.to_string())),
        }
    }
}

impl Database {
    /// Places suited to an occasion: any keyword as a substring of the
    /// perfect_for or audience tag text, or a category hit. Ordered by
    /// rating descending; the total is computed before paging.
    pub fn recommend(&self, occasion: Occasion, limit: usize, offset: usize) -> Result<SearchHits> {
        let limit = crate::clamp_limit(limit);

        // Config fault: both tables empty means nothing to match on
        if occasion.keywords().is_empty() && occasion.categories().is_empty() {
            return Ok((Vec::new(), 0));
        }

        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
        let where_clause = occasion_block(occasion, &mut params_vec);

        let total: usize = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM places WHERE {where_clause}"),
            rusqlite::params_from_iter(params_vec.iter().map(|p| p.as_ref())),
            |row| row.get(0),
        )?;

        params_vec.push(Box::new(limit as i64));
        params_vec.push(Box::new(offset as i64));
        let mut stmt = self.conn.prepare(&format!(
            "SELECT * FROM places WHERE {where_clause}
             ORDER BY rating DESC
             LIMIT ? OFFSET ?"
        ))?;
        let places = stmt
            .query_map(
                rusqlite::params_from_iter(params_vec.iter().map(|p| p.as_ref())),
                place_from_row,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((places, total))
    }

    /// Cache-wrapped variant of [`recommend`](Self::recommend)
    pub fn recommend_cached(
        &self,
        cache: &TtlCache<SearchHits>,
        occasion: Occasion,
        limit: usize,
        offset: usize,
    ) -> Result<SearchHits> {
        let limit = crate::clamp_limit(limit);
        let key = occasion_cache_key(occasion.as_str(), limit, offset);
        if let Some(hits) = cache.get(&key) {
            return Ok(hits);
        }
        let hits = self.recommend(occasion, limit, offset)?;
        cache.set(key, hits.clone());
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_occasions() {
        for occasion in Occasion::ALL {
            assert_eq!(occasion.as_str().parse::<Occasion>().unwrap(), occasion);
        }
    }

    #[test]
    fn test_parse_invalid_occasion() {
        let err = "not_a_real_occasion".parse::<Occasion>().unwrap_err();
        assert!(matches!(err, WainError::InvalidOccasion(_)));
    }

    #[test]
    fn test_every_occasion_has_keywords_and_categories() {
        for occasion in Occasion::ALL {
            assert!(!occasion.keywords().is_empty());
            assert!(!occasion.categories().is_empty());
        }
    }
}
