use super::fetcher::Fetcher;
use super::link_extractor::extract_json_links;
use crate::errors::{AppError, AppResult};
use tracing::{info, warn};
use url::Url;

/// Fetches the listing page at `base_url` and extracts its `.json` links.
///
/// The page is buffered in full before scanning so a link is never split across
/// two reads. A non-success status is logged and its body is scanned like any
/// other page. A body that cannot be read yields no links.
///
/// # Errors
///
/// Returns `NetworkError` only when the listing request cannot be sent.
pub async fn fetch_listing<F>(fetcher: &F, base_url: &Url) -> AppResult<Vec<String>>
where
    F: Fetcher + ?Sized,
{
    info!(url = %base_url, "Fetching listing");
    let page = match fetcher.fetch_page(base_url).await {
        Ok(page) => page,
        Err(e @ AppError::NetworkError(_)) => return Err(e),
        Err(e) => {
            warn!(url = %base_url, error = %e, "Listing body could not be read");
            return Ok(Vec::new());
        }
    };

    if !page.is_success() {
        warn!(url = %base_url, status = page.status, "Listing returned an error status");
    }

    let links = extract_json_links(&page.body);
    info!(
        status = page.status,
        bytes = page.body.len(),
        links_found = links.len(),
        "Listing fetched"
    );
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downloader::Page;
    use async_trait::async_trait;
    use std::path::Path;

    enum PageFetcher {
        Serves(u16, &'static str),
        Unreachable,
        BrokenBody,
    }

    #[async_trait]
    impl Fetcher for PageFetcher {
        async fn fetch_page(&self, url: &Url) -> AppResult<Page> {
            match self {
                Self::Serves(status, body) => Ok(Page {
                    status: *status,
                    body: body.as_bytes().to_vec(),
                }),
                Self::Unreachable => Err(AppError::NetworkError(format!("unreachable: {url}"))),
                Self::BrokenBody => Err(AppError::IoError(format!("reset: {url}"))),
            }
        }

        async fn fetch_to_file(&self, _url: &Url, _destination: &Path) -> AppResult<u64> {
            unreachable!("listing never downloads files")
        }
    }

    fn base() -> Url {
        Url::parse("https://example.com/vex/2022/").unwrap()
    }

    #[tokio::test]
    async fn test_fetch_listing_extracts_links() {
        let fetcher = PageFetcher::Serves(
            200,
            "<a href=\"a.json\">a</a>\n<a href=\"b.txt\">b</a>\n<a href=\"c.json\">c</a>\n",
        );
        let links = fetch_listing(&fetcher, &base()).await.unwrap();
        assert_eq!(links, vec!["a.json", "c.json"]);
    }

    #[tokio::test]
    async fn test_fetch_listing_empty_page() {
        let fetcher = PageFetcher::Serves(200, "");
        assert!(fetch_listing(&fetcher, &base()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_listing_error_status_is_not_fatal() {
        let fetcher = PageFetcher::Serves(503, "<h1>Service Unavailable</h1>\n");
        assert!(fetch_listing(&fetcher, &base()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_listing_scans_error_page_body() {
        let fetcher = PageFetcher::Serves(404, "<a href=\"moved.json\">moved</a>\n");
        let links = fetch_listing(&fetcher, &base()).await.unwrap();
        assert_eq!(links, vec!["moved.json"]);
    }

    #[tokio::test]
    async fn test_fetch_listing_unreadable_body_yields_no_links() {
        let links = fetch_listing(&PageFetcher::BrokenBody, &base()).await.unwrap();
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_listing_propagates_network_error() {
        let err = fetch_listing(&PageFetcher::Unreachable, &base())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NetworkError(_)));
    }
}
