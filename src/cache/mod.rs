//! Key-value cache used for read-through contract state.
//!
//! Values are a tagged union so readers never perform unchecked casts: a
//! value stored under a key with an unexpected variant reads as a miss.

pub mod memory;

pub use memory::MemoryCache;

/// A cached contract value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheValue {
    Bool(bool),
    U64(u64),
}

impl CacheValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U64(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for CacheValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for CacheValue {
    fn from(value: u64) -> Self {
        Self::U64(value)
    }
}

/// Logical cache keys for contract state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    IsPaused,
    CreditsPerEgld,
}

impl CacheKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IsPaused => "isPaused",
            Self::CreditsPerEgld => "creditsPerEgld",
        }
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concurrent string-keyed cache.
///
/// Implementations must tolerate concurrent `get`/`set` from many tasks; the
/// last `set` on a key must be visible to subsequent `get`s.
pub trait Cacher: Send + Sync {
    fn get(&self, key: &str) -> Option<CacheValue>;

    fn set(&self, key: &str, value: CacheValue);
}
