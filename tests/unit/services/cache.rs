//! Unit tests for the TTL price cache

use pulsewatch::services::PriceCache;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const TTL: Duration = Duration::from_secs(60);

#[tokio::test]
async fn test_fresh_entry_is_served_from_cache() {
    let cache: PriceCache<Vec<f64>> = PriceCache::new();
    let calls = AtomicUsize::new(0);

    for _ in 0..3 {
        let value = cache
            .get_or_fetch("TCS.NS", TTL, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                vec![1.0, 2.0]
            })
            .await;
        assert_eq!(value, vec![1.0, 2.0]);
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_expired_entry_is_refetched() {
    let cache: PriceCache<u32> = PriceCache::new();
    let first = cache.get_or_fetch("k", Duration::ZERO, || async { 1 }).await;
    let second = cache.get_or_fetch("k", Duration::ZERO, || async { 2 }).await;
    assert_eq!((first, second), (1, 2));
}

#[tokio::test]
async fn test_keys_are_independent() {
    let cache: PriceCache<&'static str> = PriceCache::new();
    cache.get_or_fetch("a", TTL, || async { "a" }).await;
    let b = cache.get_or_fetch("b", TTL, || async { "b" }).await;
    assert_eq!(b, "b");
    assert_eq!(cache.len().await, 2);
}

#[tokio::test]
async fn test_rejected_values_are_not_stored() {
    let cache: PriceCache<Vec<u8>> = PriceCache::new();
    let empty = cache
        .get_or_fetch_if("k", TTL, || async { Vec::new() }, |v| !v.is_empty())
        .await;
    assert!(empty.is_empty());
    assert!(cache.is_empty().await);

    let filled = cache
        .get_or_fetch_if("k", TTL, || async { vec![7] }, |v| !v.is_empty())
        .await;
    assert_eq!(filled, vec![7]);
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_invalidate_forces_refetch() {
    let cache: PriceCache<u32> = PriceCache::new();
    cache.get_or_fetch("k", TTL, || async { 1 }).await;
    cache.invalidate("k").await;
    assert_eq!(cache.get_or_fetch("k", TTL, || async { 2 }).await, 2);
}
