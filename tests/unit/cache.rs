//! ResultCache on its own.

use std::sync::Arc;

use fuzzrank::{Match, ResultCache, DEFAULT_MAX_CACHE_ELEMENTS};

fn results(n: usize) -> Arc<Vec<Match<String>>> {
    Arc::new(
        (0..n)
            .map(|index| Match {
                item: Arc::new(format!("item {index}")),
                index,
                score: 100.0,
                completeness: 100.0,
                token_score: None,
                token_matches: None,
            })
            .collect(),
    )
}

#[test]
fn test_default_capacity() {
    let cache: ResultCache<String> = ResultCache::default();
    assert_eq!(cache.capacity(), DEFAULT_MAX_CACHE_ELEMENTS);
    assert!(cache.is_empty());
}

#[test]
fn test_evicts_least_recently_used() {
    let cache = ResultCache::new(2);
    cache.insert("a".into(), results(1));
    cache.insert("b".into(), results(2));

    // Touch "a" so "b" becomes the oldest
    assert!(cache.get("a").is_some());
    let evicted = cache.insert("c".into(), results(3));

    assert_eq!(evicted.as_deref(), Some("b"));
    assert!(cache.contains("a"));
    assert!(cache.contains("c"));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_reinsert_existing_key_does_not_evict() {
    let cache = ResultCache::new(2);
    cache.insert("a".into(), results(1));
    cache.insert("b".into(), results(1));
    assert_eq!(cache.insert("a".into(), results(4)), None);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get("a").unwrap().len(), 4);
}

#[test]
fn test_get_returns_shared_results() {
    let cache = ResultCache::new(4);
    let stored = results(2);
    cache.insert("q".into(), Arc::clone(&stored));
    assert!(Arc::ptr_eq(&cache.get("q").unwrap(), &stored));
}
