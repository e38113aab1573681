use std::time::Instant;
use surf::middleware::{Middleware, Next};
use surf::utils::async_trait;
use surf::{Client, Request, Response, Result};

/// Surf middleware that logs every request and its response status at debug level.
pub struct SurfLogging;

#[async_trait]
impl Middleware for SurfLogging {
    async fn handle(&self, req: Request, client: Client, next: Next<'_>) -> Result<Response> {
        let method = req.method();
        let url = req.url().clone();
        let start = Instant::now();

        log::debug!("{} {}", method, url);
        let response = next.run(req, client).await?;
        log::debug!(
            "{} {} -> {} ({:?})",
            method,
            url,
            response.status(),
            start.elapsed()
        );

        Ok(response)
    }
}
