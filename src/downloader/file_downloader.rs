use super::fetcher::Fetcher;
use crate::errors::{AppError, AppResult};
use crate::models::{DownloadOutcome, DownloadReport, DownloadStatus, DownloadTask};
use futures::stream::{self, StreamExt};
use std::path::Path;
use tracing::{info, warn};
use url::Url;

/// Downloads one link into `download_dir`, named after the link's base name.
///
/// Never fails: every error is logged and recorded in the returned outcome.
pub async fn download_link<F>(
    fetcher: &F,
    base_url: &Url,
    link: &str,
    download_dir: &Path,
) -> DownloadOutcome
where
    F: Fetcher + ?Sized,
{
    let task = match DownloadTask::from_link(base_url, link, download_dir) {
        Ok(task) => task,
        Err(e) => {
            warn!(link = link, error = %e, "Skipping link");
            return DownloadOutcome {
                link: link.to_string(),
                url: None,
                destination: None,
                status: DownloadStatus::Failed {
                    reason: e.to_string(),
                },
            };
        }
    };

    let status = match fetcher.fetch_to_file(&task.url, &task.destination).await {
        Ok(bytes) => {
            info!(
                file = %task.destination.display(),
                bytes = bytes,
                "File downloaded"
            );
            DownloadStatus::Succeeded { bytes }
        }
        Err(e) => {
            warn!(
                url = %task.url,
                error = %e,
                "Failed to download file"
            );
            DownloadStatus::Failed {
                reason: e.to_string(),
            }
        }
    };

    DownloadOutcome {
        link: link.to_string(),
        url: Some(task.url),
        destination: Some(task.destination),
        status,
    }
}

/// Downloads every link with at most `concurrency` requests in flight.
///
/// # Behavior
///
/// - **No deduplication**: a link listed twice is fetched twice into the same file.
/// - **Ordered report**: outcomes follow discovery order whatever the concurrency.
/// - **No retry**: a failed link is recorded once and the run moves on.
///
/// A `concurrency` of 0 is treated as 1.
pub async fn download_all<F>(
    fetcher: &F,
    base_url: &Url,
    links: &[String],
    download_dir: &Path,
    concurrency: usize,
) -> DownloadReport
where
    F: Fetcher + ?Sized,
{
    info!(
        total = links.len(),
        concurrency = concurrency,
        "Starting download"
    );

    let outcomes: Vec<DownloadOutcome> = stream::iter(links)
        .map(|link| download_link(fetcher, base_url, link, download_dir))
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let report = DownloadReport { outcomes };
    if report.failed() == 0 {
        info!(downloaded = report.succeeded(), "Download completed");
    } else {
        info!(
            downloaded = report.succeeded(),
            failed = report.failed(),
            "Download completed with errors"
        );
    }
    report
}

/// Creates the download directory (and parents) if it does not exist yet.
pub async fn ensure_download_dir(download_dir: &Path) -> AppResult<()> {
    tokio::fs::create_dir_all(download_dir).await.map_err(|e| {
        AppError::FilesystemError(format!(
            "Failed to create directory {}: {}",
            download_dir.display(),
            e
        ))
    })
}
