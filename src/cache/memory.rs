//! In-memory cache backed by a sharded concurrent map.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cache::{CacheValue, Cacher};
use crate::observability::metrics;

#[derive(Debug, Clone, Copy)]
struct Entry {
    value: CacheValue,
    stored_at: Instant,
}

/// A thread-safe cache for contract values.
///
/// Entries live for the process lifetime unless a TTL is configured, in which
/// case an expired entry is dropped on the next read of its key.
#[derive(Clone, Default)]
pub struct MemoryCache {
    inner: Arc<DashMap<String, Entry>>,
    ttl: Option<Duration>,
}

impl MemoryCache {
    /// Create a cache whose entries never expire.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache whose entries expire `ttl` after being stored.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            ttl: Some(ttl),
        }
    }

    /// Build from a TTL in seconds, 0 meaning no expiry.
    pub fn from_ttl_secs(ttl_secs: u64) -> Self {
        if ttl_secs == 0 {
            Self::new()
        } else {
            Self::with_ttl(Duration::from_secs(ttl_secs))
        }
    }

    /// Drop a single entry.
    pub fn remove(&self, key: &str) -> Option<CacheValue> {
        let removed = self.inner.remove(key).map(|(_, entry)| entry.value);
        metrics::record_cache_size(self.inner.len());
        removed
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.inner.clear();
        metrics::record_cache_size(0);
    }

    /// Number of stored entries, expired ones included until they are read.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn is_expired(&self, entry: &Entry) -> bool {
        self.ttl
            .map(|ttl| entry.stored_at.elapsed() >= ttl)
            .unwrap_or(false)
    }
}

impl Cacher for MemoryCache {
    fn get(&self, key: &str) -> Option<CacheValue> {
        let entry = *self.inner.get(key)?;
        if self.is_expired(&entry) {
            // Only evict the entry we saw; a concurrent set may have replaced it.
            self.inner
                .remove_if(key, |_, current| current.stored_at == entry.stored_at);
            metrics::record_cache_size(self.inner.len());
            tracing::debug!(key, "Cache entry expired");
            return None;
        }
        Some(entry.value)
    }

    fn set(&self, key: &str, value: CacheValue) {
        self.inner.insert(
            key.to_string(),
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
        metrics::record_cache_size(self.inner.len());
    }
}

impl std::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("entries", &self.inner.len())
            .field("ttl", &self.ttl)
            .finish()
    }
}
