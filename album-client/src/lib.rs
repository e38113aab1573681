pub mod cache;
mod client;
mod error;


use ::utils::surf_logging::SurfLogging;
use cache::{QueryCache, QueryKey, SharedQueryCache};
pub use cache::{CacheStats, DeferredAlbums};
pub use client::{albums_path, page_window, AlbumSource, RemoteAlbumService, PAGE_SIZE};
pub use error::Error;
pub use error::ErrorKind;
use std::sync::Arc;
use surf::{Client, Url};

/// An album record as returned by the remote service. Treated as opaque JSON;
/// nothing in this client inspects individual fields.
pub type Album = serde_json::Value;

/// Client for the paged albums listing: a fetch source plus a process-wide
/// query cache shared by prefetching and rendering callers.
#[derive(Clone)]
pub struct AlbumClient {
    source: Arc<dyn AlbumSource>,
    cache: SharedQueryCache,
}

impl AlbumClient {
    /// Create a client against the remote album service at `api_url`.
    pub fn new(api_url: &str) -> Result<Self, Error> {
        let base = Url::parse(api_url)
            .map_err(|error| Error::config(format!("invalid api url {api_url}: {error}")))?;
        let mut http = Client::new().with(SurfLogging);
        http.set_base_url(base);
        Ok(Self::with_source(Arc::new(RemoteAlbumService::new(http))))
    }

    /// Create a client over an arbitrary album source, with a fresh cache.
    pub fn with_source(source: Arc<dyn AlbumSource>) -> Self {
        Self {
            source,
            cache: Arc::new(QueryCache::new()),
        }
    }

    /// Prefetch path: make sure a cache entry exists for `page` and return its
    /// deferred handle without waiting for the fetch to settle.
    pub fn ensure_page(&self, page: u32) -> DeferredAlbums {
        let source = Arc::clone(&self.source);
        self.cache
            .ensure(QueryKey::albums(page), move || async move {
                source.fetch_page(page).await
            })
    }

    /// Rendering path: suspend until the entry for `page` resolves, then return
    /// the records or re-raise the cached failure.
    pub async fn read_page(&self, page: u32) -> Result<Arc<Vec<Album>>, Error> {
        let source = Arc::clone(&self.source);
        self.cache
            .read(QueryKey::albums(page), move || async move {
                source.fetch_page(page).await
            })
            .await
    }

    /// Discard every cached page; the next read of any page refetches.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Get cache statistics
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
