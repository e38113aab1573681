use crate::error::Error;
use crate::Album;
use dashmap::DashMap;
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use getset::CopyGetters;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;

/// Canonical identifier of a cached page query.
///
/// Two keys are equal iff resource name and page number match; the prefetching
/// loader and the rendering view both derive their key through [`QueryKey::albums`],
/// which is what makes them share a single cache entry instead of issuing two fetches.
#[derive(Hash, Eq, PartialEq, Clone, Debug, CopyGetters)]
#[get_copy = "pub"]
pub struct QueryKey {
    resource: &'static str,
    page: u32,
}

impl QueryKey {
    /// Key for the albums listing at the given 1-based page.
    pub fn albums(page: u32) -> Self {
        Self {
            resource: "albums",
            page,
        }
    }
}

/// Deferred handle to a page of albums: a clonable shared future that every
/// interested party (loader, view, cache) can await independently.
pub type DeferredAlbums = Shared<BoxFuture<'static, Result<Arc<Vec<Album>>, Error>>>;

/// In-memory query cache keyed by [`QueryKey`].
///
/// An entry is the shared handle of the fetch that produced (or will produce) the
/// page. Entries are created by `ensure`, never expire, and are only discarded by
/// `clear`. A failed fetch stays cached and re-raises its error to later readers.
pub struct QueryCache {
    entries: DashMap<QueryKey, DeferredAlbums>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Return the entry for `key`, creating it if absent.
    ///
    /// On a miss the fetch is spawned as a task exactly once and its shared handle is
    /// stored before this call returns, so concurrent `ensure` calls for the same key
    /// observe one pending entry rather than racing duplicate fetches. The returned
    /// handle resolves when the fetch settles; callers that only prefetch may drop it
    /// without cancelling anything.
    pub fn ensure<F, Fut>(&self, key: QueryKey, fetch_fn: F) -> DeferredAlbums
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Album>, Error>> + Send + 'static,
    {
        let entry = self.entries.entry(key.clone()).or_insert_with(|| {
            log::debug!("cache miss, starting fetch for {:?}", key);
            let task = tokio::spawn(fetch_fn());
            async move {
                match task.await {
                    Ok(result) => result.map(Arc::new),
                    Err(join_error) => Err(Error::task(join_error)),
                }
            }
            .boxed()
            .shared()
        });
        entry.value().clone()
    }

    /// Consuming read: same dedup semantics as [`QueryCache::ensure`], but suspends
    /// until the entry resolves, then returns the value or re-raises the cached failure.
    pub async fn read<F, Fut>(&self, key: QueryKey, fetch_fn: F) -> Result<Arc<Vec<Album>>, Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Album>, Error>> + Send + 'static,
    {
        self.ensure(key, fetch_fn).await
    }

    /// Discard all entries. Fetches still in flight run to completion, but their
    /// results are unreachable; the next `ensure`/`read` for any key refetches.
    pub fn clear(&self) {
        self.entries.clear();
        log::info!("Query cache cleared");
    }

    /// Snapshot of cache occupancy.
    pub fn stats(&self) -> CacheStats {
        let total_entries = self.entries.len();
        let resolved_entries = self
            .entries
            .iter()
            .filter(|entry| entry.value().peek().is_some())
            .count();

        CacheStats {
            total_entries,
            resolved_entries,
            pending_entries: total_entries - resolved_entries,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub resolved_entries: usize,
    pub pending_entries: usize,
}

/// Thread-safe wrapper for the cache
pub type SharedQueryCache = Arc<QueryCache>;
