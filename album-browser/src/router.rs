use crate::context::Context;
use crate::{loader, views};
use lazy_static::lazy_static;
use url::Url;

lazy_static! {
    // Dummy origin so relative navigation targets parse as URLs.
    static ref NAVIGATION_BASE: Url =
        Url::parse("http://albums.local/").expect("static navigation base");
}

/// Resolve a navigation target and render the matching view.
///
/// `/` is the home view, `/albums` (optionally `?page=N`) runs the albums loader
/// and view inside the error boundary, anything else is the not-found view.
/// Returns the rendered output lines in display order.
pub async fn navigate(ctx: &Context, target: &str) -> Vec<String> {
    let mut out = Vec::new();
    out.push("[Home](/) [Albums](/albums)".to_string());

    match NAVIGATION_BASE.join(target) {
        Ok(url) => {
            log::info!("navigating to {}", url.path());
            render_route(ctx, &url, &mut out).await;
        }
        Err(error) => {
            log::warn!("unparseable navigation target {:?}: {}", target, error);
            views::not_found(&mut out);
        }
    }

    out.push("© 2024".to_string());
    out
}

async fn render_route(ctx: &Context, url: &Url, out: &mut Vec<String>) {
    match url.path() {
        "/" => views::home(out),
        "/albums" | "/albums/" => {
            // loader runs before the view mounts; the view suspends on its handle
            let deferred = loader::albums_loader(ctx, url);
            if let Err(error) = views::albums(ctx, url, deferred, out).await {
                log::warn!("albums route failed: {}", error);
                views::error_boundary(&error, out);
            }
        }
        _ => views::not_found(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use album_client::{Album, AlbumClient, AlbumSource, Error, PAGE_SIZE};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubSource {
        calls: AtomicUsize,
        last_page: AtomicU32,
    }

    impl StubSource {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last_page: AtomicU32::new(0),
            })
        }
    }

    #[async_trait]
    impl AlbumSource for StubSource {
        async fn fetch_page(&self, page: u32) -> Result<Vec<Album>, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.last_page.store(page, Ordering::SeqCst);
            let start = (page - 1) * PAGE_SIZE;
            Ok((start..start + PAGE_SIZE)
                .map(|id| json!({ "id": id + 1, "title": format!("album {}", id + 1) }))
                .collect())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl AlbumSource for BrokenSource {
        async fn fetch_page(&self, _page: u32) -> Result<Vec<Album>, Error> {
            Err(Error::Status {
                url: "/albums?_start=0&_limit=5".into(),
                status: 500,
            })
        }
    }

    fn context(source: Arc<dyn AlbumSource>) -> Context {
        Context::new(AlbumClient::with_source(source), Config::load().unwrap())
    }

    #[tokio::test]
    async fn test_home_route() {
        let ctx = context(StubSource::new());
        let out = navigate(&ctx, "/").await;
        assert!(out.contains(&"# Home".to_string()));
    }

    #[tokio::test]
    async fn test_unmatched_route_is_not_found() {
        let ctx = context(StubSource::new());
        let out = navigate(&ctx, "/photos").await;
        assert!(out.contains(&"# Not Found".to_string()));
    }

    #[tokio::test]
    async fn test_albums_page_two_fetches_once_and_renders_after_placeholder() {
        let source = StubSource::new();
        let ctx = context(source.clone());

        let out = navigate(&ctx, "/albums?page=2").await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.last_page.load(Ordering::SeqCst), 2);

        let placeholder = out.iter().position(|line| line == "Loading...").unwrap();
        let records = out.iter().position(|line| line.contains("\"id\"")).unwrap();
        assert!(placeholder < records);
        // page 2 starts at record 6
        assert!(out[records].contains("album 6"));
    }

    #[tokio::test]
    async fn test_renavigation_reuses_cache_until_clear() {
        let source = StubSource::new();
        let ctx = context(source.clone());

        navigate(&ctx, "/albums?page=1").await;
        navigate(&ctx, "/albums?page=1").await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        // the Clear control
        ctx.album_client().clear_cache();

        navigate(&ctx, "/albums?page=1").await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_rendering_is_idempotent_for_a_resolved_page() {
        let ctx = context(StubSource::new());

        let first = navigate(&ctx, "/albums?page=3").await;
        let second = navigate(&ctx, "/albums?page=3").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_or_invalid_page_defaults_to_first() {
        let source = StubSource::new();
        let ctx = context(source.clone());

        navigate(&ctx, "/albums").await;
        assert_eq!(source.last_page.load(Ordering::SeqCst), 1);

        ctx.album_client().clear_cache();
        navigate(&ctx, "/albums?page=banana").await;
        assert_eq!(source.last_page.load(Ordering::SeqCst), 1);
        // both targets share the page-1 cache entry, so only the post-clear navigation fetched
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_hits_error_boundary() {
        let ctx = context(Arc::new(BrokenSource));

        let out = navigate(&ctx, "/albums").await;

        assert!(out.contains(&"# You caused an error.".to_string()));
        assert!(out.iter().any(|line| line.contains("HTTP 500")));
        assert!(!out.iter().any(|line| line.contains("\"id\"")));
    }
}
