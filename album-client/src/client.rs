use crate::error::Error;
use crate::Album;
use async_trait::async_trait;
use surf::Client;

/// Fixed number of album records per page.
pub const PAGE_SIZE: u32 = 5;

/// Offset/limit window for a 1-based page: page 1 gives (0, 5), page 5 gives (20, 5).
///
/// The offset is computed in u64 so that any page number accepted upstream yields an
/// exact offset instead of wrapping.
pub fn page_window(page: u32) -> (u64, u32) {
    ((u64::from(page.max(1)) - 1) * u64::from(PAGE_SIZE), PAGE_SIZE)
}

/// Request path for a page of albums, in the remote service's offset/limit dialect.
pub fn albums_path(page: u32) -> String {
    let (start, limit) = page_window(page);
    format!("/albums?_start={start}&_limit={limit}")
}

/// Source of album pages. The remote REST service in production; test doubles
/// inject canned pages through the same seam.
#[async_trait]
pub trait AlbumSource: Send + Sync {
    /// Fetch one page of albums. No internal retry; failures propagate to the caller.
    async fn fetch_page(&self, page: u32) -> Result<Vec<Album>, Error>;
}

/// Album source backed by the remote REST API.
pub struct RemoteAlbumService {
    http: Client,
}

impl RemoteAlbumService {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AlbumSource for RemoteAlbumService {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Album>, Error> {
        let path = albums_path(page);
        log::debug!("fetching {}", path);

        let mut response = self
            .http
            .get(&path)
            .header("Content-type", "application/json")
            .await
            .map_err(|error| Error::request(&path, error))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("fetch for {} failed with status {}", path, status);
            return Err(Error::status(&path, status));
        }

        response.body_json::<Vec<Album>>().await.map_err(Error::decode)
    }
}
