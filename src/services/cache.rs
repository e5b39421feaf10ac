//! TTL cache for raw upstream fetches.
//!
//! Owned by whoever performs the fetch and passed in explicitly; there is no
//! process-global cache.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

pub struct PriceCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> PriceCache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key` if younger than `ttl`, otherwise run
    /// `fetch` and cache its result.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, ttl: Duration, fetch: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        self.get_or_fetch_if(key, ttl, fetch, |_| true).await
    }

    /// Like [`get_or_fetch`](Self::get_or_fetch), but only values accepted by
    /// `keep` are stored.
    pub async fn get_or_fetch_if<F, Fut, K>(&self, key: &str, ttl: Duration, fetch: F, keep: K) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
        K: FnOnce(&V) -> bool,
    {
        if let Some(value) = self.get_fresh(key, ttl).await {
            return value;
        }

        let value = fetch().await;
        if keep(&value) {
            self.entries.write().await.insert(
                key.to_string(),
                CacheEntry {
                    value: value.clone(),
                    stored_at: Instant::now(),
                },
            );
        }
        value
    }

    async fn get_fresh(&self, key: &str, ttl: Duration) -> Option<V> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < ttl)
            .map(|entry| entry.value.clone())
    }

    pub async fn invalidate(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<V: Clone> Default for PriceCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
