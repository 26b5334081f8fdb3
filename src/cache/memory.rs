// ABOUTME: In-memory history cache with LRU eviction
// ABOUTME: Stores computed history series behind a tokio RwLock keyed by workout fingerprint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

use super::WorkoutFingerprint;
use crate::config::CacheConfig;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use stride_intelligence::HistoryPoint;
use tokio::sync::RwLock;
use tracing::debug;

/// Shared, immutable history series
pub type SharedHistory = Arc<Vec<HistoryPoint>>;

/// In-memory history cache with LRU eviction
///
/// Cloning shares the underlying store. `LruCache` provides O(1) eviction by
/// removing the least-recently-used series once capacity is reached.
#[derive(Clone)]
pub struct HistoryCache {
    store: Arc<RwLock<LruCache<WorkoutFingerprint, SharedHistory>>>,
}

impl HistoryCache {
    /// Default cache capacity when config specifies zero entries
    const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache sized from configuration
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        // LruCache requires NonZeroUsize for capacity
        let capacity =
            NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CACHE_CAPACITY);

        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Look up a series, refreshing its recency
    pub async fn get(&self, key: &WorkoutFingerprint) -> Option<SharedHistory> {
        // LruCache::get is mutable (updates access order for LRU)
        self.store.write().await.get(key).cloned()
    }

    /// Store a series, evicting the least recently used one when full
    pub async fn insert(&self, key: WorkoutFingerprint, history: SharedHistory) {
        // push returns the replaced entry too; only a different key is an eviction
        let displaced = self.store.write().await.push(key.clone(), history);
        if let Some((evicted, _)) = displaced.filter(|(old, _)| *old != key) {
            debug!(fingerprint = %evicted, "Evicted history series from cache");
        }
    }

    /// Drop every cached series
    pub async fn invalidate_all(&self) {
        self.store.write().await.clear();
    }

    /// Number of cached series
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether the cache holds no series
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Maximum number of cached series
    pub async fn capacity(&self) -> usize {
        self.store.read().await.cap().get()
    }
}
