use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

/// A fetched page: the response status and its full body, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Page {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Source of remote content used by the pipeline.
///
/// The HTTP implementation is [`HttpFetcher`]; tests substitute in-memory
/// implementations so that stages can run without the network.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns the whole response, error statuses included.
    ///
    /// Fails with `NetworkError` only when the request cannot be sent at all, and
    /// with `IoError` when the body cannot be read.
    async fn fetch_page(&self, url: &Url) -> AppResult<Page>;

    /// Fetches `url` and streams the body into `destination`, creating or
    /// overwriting it. Returns the number of bytes written.
    ///
    /// A failure while copying leaves whatever was written so far on disk.
    async fn fetch_to_file(&self, url: &Url, destination: &Path) -> AppResult<u64>;
}

/// [`Fetcher`] backed by a shared `reqwest` client. No retries.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    // Send errors are connection/timeout failures
    async fn send(&self, url: &Url) -> AppResult<reqwest::Response> {
        self.client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to fetch {url}: {e}")))
    }

    async fn get(&self, url: &Url) -> AppResult<reqwest::Response> {
        let response = self.send(url).await?;
        let status = response.status();
        response.error_for_status().map_err(|e| {
            let status_code = status.as_u16();
            AppError::NetworkError(format!("HTTP {status_code}: Failed to fetch {url}: {e}"))
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_page(&self, url: &Url) -> AppResult<Page> {
        let response = self.send(url).await?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::IoError(format!("Failed to read body of {url}: {e}")))?;
        Ok(Page {
            status,
            body: body.to_vec(),
        })
    }

    async fn fetch_to_file(&self, url: &Url, destination: &Path) -> AppResult<u64> {
        let mut response = self.get(url).await?;

        let mut file = File::create(destination).await.map_err(|e| {
            AppError::FilesystemError(format!(
                "Failed to create file {}: {}",
                destination.display(),
                e
            ))
        })?;

        let mut written: u64 = 0;
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| AppError::IoError(format!("Failed to read body of {url}: {e}")))?
        {
            file.write_all(&chunk).await.map_err(|e| {
                AppError::IoError(format!(
                    "Failed to write to file {}: {}",
                    destination.display(),
                    e
                ))
            })?;
            written += chunk.len() as u64;
        }

        file.flush().await.map_err(|e| {
            AppError::IoError(format!(
                "Failed to flush file {}: {}",
                destination.display(),
                e
            ))
        })?;

        Ok(written)
    }
}
