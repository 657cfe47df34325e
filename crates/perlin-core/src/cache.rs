//! Bounded least-recently-used memoization
//!
//! Kernel construction is dominated by gradient generation and permutation
//! shuffling. [`BoundedCache`] keeps the most recently used results keyed by
//! configuration so repeated builds with the same parameters are free.
//!
//! # Thread Safety and Cache Design
//!
//! A single mutex guards the whole "check, construct, insert" sequence, so
//! the factory for a key runs at most once while that key stays resident,
//! even when several threads ask for it at the same time. The lock is held
//! while the factory runs; a factory must therefore never call back into
//! the same cache.
//!
//! Values are handed out as `Arc<V>`: every hit for a key returns a clone of
//! the same `Arc`, which is how callers observe instance identity.

use crate::Result;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// A resident cache entry
struct CacheEntry<V> {
    value: Arc<V>,
    /// Access stamp from the cache's monotonic counter
    last_access: u64,
}

/// Mutable state protected by the cache mutex
struct CacheState<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    access_counter: u64,
    hits: usize,
    misses: usize,
    evictions: usize,
}

impl<K, V> CacheState<K, V> {
    fn next_stamp(&mut self) -> u64 {
        self.access_counter += 1;
        self.access_counter
    }
}

/// Fixed-capacity LRU cache with compute-once semantics
///
/// # Example
///
/// ```rust
/// use perlin_core::BoundedCache;
///
/// let cache: BoundedCache<u64, Vec<f64>> = BoundedCache::new(2);
/// let first = cache.get_or_create(7, |seed| vec![*seed as f64; 4]);
/// let second = cache.get_or_create(7, |_| unreachable!("already cached"));
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// ```
pub struct BoundedCache<K, V> {
    state: Mutex<CacheState<K, V>>,
    capacity: usize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Create an empty cache holding at most `capacity` entries
    ///
    /// A capacity of zero disables storage: every request constructs.
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::with_capacity(capacity),
                access_counter: 0,
                hits: 0,
                misses: 0,
                evictions: 0,
            }),
            capacity,
        }
    }

    /// Get a cached value or construct it if not present
    ///
    /// On a hit the entry becomes the most recently used. On a miss
    /// `factory` is invoked exactly once, the result stored, and the least
    /// recently used entry evicted if the cache overflows.
    pub fn get_or_create<F>(&self, key: K, factory: F) -> Arc<V>
    where
        F: FnOnce(&K) -> V,
    {
        let mut state = self.lock();
        if let Some(value) = Self::touch(&mut state, &key) {
            return value;
        }
        state.misses += 1;
        debug!(?key, "cache miss, constructing value");
        let value = Arc::new(factory(&key));
        self.insert(&mut state, key, Arc::clone(&value));
        value
    }

    /// Fallible variant of [`BoundedCache::get_or_create`]
    ///
    /// Errors from `factory` are returned unchanged and nothing is stored.
    pub fn try_get_or_create<F>(&self, key: K, factory: F) -> Result<Arc<V>>
    where
        F: FnOnce(&K) -> Result<V>,
    {
        let mut state = self.lock();
        if let Some(value) = Self::touch(&mut state, &key) {
            return Ok(value);
        }
        state.misses += 1;
        debug!(?key, "cache miss, constructing value");
        let value = Arc::new(factory(&key)?);
        self.insert(&mut state, key, Arc::clone(&value));
        Ok(value)
    }

    /// Look up a value without constructing, marking it most recently used
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut state = self.lock();
        Self::touch(&mut state, key)
    }

    /// Whether `key` is resident, without touching recency or statistics
    pub fn contains(&self, key: &K) -> bool {
        self.lock().entries.contains_key(key)
    }

    /// Remove all entries and reset statistics
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.access_counter = 0;
        state.hits = 0;
        state.misses = 0;
        state.evictions = 0;
    }

    /// Number of resident entries
    pub fn size(&self) -> usize {
        self.lock().entries.len()
    }

    /// Maximum number of resident entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        let lookups = state.hits + state.misses;
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            evictions: state.evictions,
            entries: state.entries.len(),
            hit_rate: if lookups > 0 {
                state.hits as f64 / lookups as f64
            } else {
                0.0
            },
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState<K, V>> {
        // The state is consistent after every statement, so a panic in a
        // factory leaves nothing half-written.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn touch(state: &mut CacheState<K, V>, key: &K) -> Option<Arc<V>> {
        let stamp = state.next_stamp();
        let entry = state.entries.get_mut(key)?;
        entry.last_access = stamp;
        let value = Arc::clone(&entry.value);
        state.hits += 1;
        trace!(?key, "cache hit");
        Some(value)
    }

    fn insert(&self, state: &mut CacheState<K, V>, key: K, value: Arc<V>) {
        if self.capacity == 0 {
            return;
        }
        let last_access = state.next_stamp();
        state.entries.insert(key, CacheEntry { value, last_access });
        while state.entries.len() > self.capacity {
            Self::evict_lru(state);
        }
    }

    /// Evict the entry with the oldest access stamp
    fn evict_lru(state: &mut CacheState<K, V>) {
        let oldest = state
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_access)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            state.entries.remove(&key);
            state.evictions += 1;
            debug!(?key, "evicted least recently used entry");
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
    /// Number of entries dropped to stay within capacity
    pub evictions: usize,
    /// Number of entries currently in cache
    pub entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}
