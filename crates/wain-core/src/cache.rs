//! In-memory TTL cache for result pages

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, SystemTime};

/// Cache entry with TTL
#[derive(Clone)]
struct CacheEntry<T> {
    value: T,
    inserted_at: SystemTime,
    expires_at: SystemTime,
}

/// Capacity-bounded TTL cache. Concurrent readers never observe a partial
/// entry (entries are replaced whole under the write lock); when full, the
/// oldest entry is evicted.
pub struct TtlCache<T> {
    entries: Arc<RwLock<HashMap<String, CacheEntry<T>>>>,
    ttl: Duration,
    max_size: usize,
}

impl<T: Clone> TtlCache<T> {
    /// Create a cache with a 5 minute TTL and room for 500 entries
    pub fn new() -> Self {
        Self::with_config(Duration::from_secs(300), 500)
    }

    pub fn with_config(ttl: Duration, max_size: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            max_size: max_size.max(1),
        }
    }

    /// Get cached value if present and not expired
    pub fn get(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(key)?;

        if SystemTime::now() < entry.expires_at {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Insert a value, evicting the oldest entry at capacity
    pub fn set(&self, key: String, value: T) {
        let now = SystemTime::now();
        let entry = CacheEntry {
            value,
            inserted_at: now,
            expires_at: now + self.ttl,
        };

        if let Ok(mut entries) = self.entries.write() {
            if entries.len() >= self.max_size && !entries.contains_key(&key) {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, e)| e.inserted_at)
                    .map(|(k, _)| k.clone());
                if let Some(oldest) = oldest {
                    entries.remove(&oldest);
                }
            }
            entries.insert(key, entry);
        }
    }

    /// Drop one entry
    pub fn invalidate(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }

    /// Drop expired entries
    pub fn cleanup(&self) {
        if let Ok(mut entries) = self.entries.write() {
            let now = SystemTime::now();
            entries.retain(|_, entry| now < entry.expires_at);
        }
    }

    /// Drop all entries
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TtlCache<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            ttl: self.ttl,
            max_size: self.max_size,
        }
    }
}

/// Deterministic key for a search page
pub fn search_cache_key(query: &str, limit: usize, offset: usize) -> String {
    format!("search:{}:{limit}:{offset}", crate::search::normalize(query))
}

/// Deterministic key for an occasion page
pub fn occasion_cache_key(occasion: &str, limit: usize, offset: usize) -> String {
    format!("occasion:{occasion}:{limit}:{offset}")
}
