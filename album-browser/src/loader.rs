use crate::context::Context;
use album_client::DeferredAlbums;
use url::Url;

/// Page number from the `page` query parameter.
///
/// Missing, non-numeric, and zero all normalize to the first page, matching the
/// service's 1-based paging.
pub fn page_param(url: &Url) -> u32 {
    url.query_pairs()
        .find(|(name, _)| name == "page")
        .and_then(|(_, value)| value.parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Routing-triggered prefetch for the albums view.
///
/// Ensures a cache entry exists for the requested page and hands back its deferred
/// handle without awaiting it; navigation proceeds while the fetch runs.
pub fn albums_loader(ctx: &Context, url: &Url) -> DeferredAlbums {
    let page = page_param(url);
    log::debug!("albums loader prefetching page {}", page);
    ctx.album_client().ensure_page(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(target: &str) -> Url {
        Url::parse(&format!("http://albums.local{target}")).unwrap()
    }

    #[test]
    fn test_page_param_present() {
        assert_eq!(page_param(&parse("/albums?page=2")), 2);
        assert_eq!(page_param(&parse("/albums?page=5")), 5);
    }

    #[test]
    fn test_page_param_defaults_to_first_page() {
        assert_eq!(page_param(&parse("/albums")), 1);
        assert_eq!(page_param(&parse("/albums?page=")), 1);
        assert_eq!(page_param(&parse("/albums?page=abc")), 1);
        assert_eq!(page_param(&parse("/albums?page=0")), 1);
        assert_eq!(page_param(&parse("/albums?page=-3")), 1);
    }
}
