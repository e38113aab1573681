use crate::context::Context;
use crate::loader::page_param;
use album_client::{DeferredAlbums, Error};
use url::Url;

/// Fixed set of pagination links offered by the albums view.
pub const PAGE_LINK_COUNT: u32 = 5;

pub fn home(out: &mut Vec<String>) {
    out.push("# Home".to_string());
}

pub fn not_found(out: &mut Vec<String>) {
    out.push("# Not Found".to_string());
}

/// Route-level error boundary: renders the error's message instead of any data.
pub fn error_boundary(error: &Error, out: &mut Vec<String>) {
    out.push("# You caused an error.".to_string());
    out.push(error.to_string());
}

/// Albums view.
///
/// Renders its chrome and the loading placeholder, suspends on the loader's
/// deferred handle, then reads the cache again for the current page and renders the
/// records. The placeholder line always precedes the rendered records; rendering is
/// a pure function of the URL and the cache state.
pub async fn albums(
    ctx: &Context,
    url: &Url,
    deferred: DeferredAlbums,
    out: &mut Vec<String>,
) -> Result<(), Error> {
    out.push("# Albums".to_string());
    let links: Vec<String> = (1..=PAGE_LINK_COUNT)
        .map(|page| format!("[Page {page}](?page={page})"))
        .collect();
    out.push(links.join(" "));
    out.push("[Clear]".to_string());

    out.push("Loading...".to_string());
    deferred.await?;

    albums_list(ctx, url, out).await
}

/// The resolved list: re-derives the page from the URL and reads the shared cache
/// entry, so it observes exactly what the loader prefetched.
async fn albums_list(ctx: &Context, url: &Url, out: &mut Vec<String>) -> Result<(), Error> {
    let page = page_param(url);
    log::debug!("rendering albums list for page {}", page);

    let albums = ctx.album_client().read_page(page).await?;
    let rendered = serde_json::to_string_pretty(albums.as_ref()).map_err(|error| Error::Decode {
        message: error.to_string(),
    })?;
    out.push(rendered);
    Ok(())
}
