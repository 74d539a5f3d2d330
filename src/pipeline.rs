use crate::config::ResolvedConfig;
use crate::downloader::{download_all, ensure_download_dir, fetch_listing, Fetcher};
use crate::errors::AppResult;
use crate::manifest::{write_changes_csv, write_index};
use crate::models::{ManifestOutcome, RunReport};
use tracing::{info, warn};
use url::Url;

/// The mirror workflow: list, download, then write manifests.
///
/// Holds the resolved configuration and the [`Fetcher`] used for every request,
/// so each stage can be exercised with an in-memory fetcher.
pub struct Pipeline<F> {
    config: ResolvedConfig,
    base_url: Url,
    fetcher: F,
}

impl<F: Fetcher> Pipeline<F> {
    /// Validates `config` and builds the pipeline.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` or `UrlError` if the configuration is not usable.
    pub fn new(config: ResolvedConfig, fetcher: F) -> AppResult<Self> {
        config.validate()?;
        let base_url = config.base_url()?;
        Ok(Self {
            config,
            base_url,
            fetcher,
        })
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Runs every stage in order and reports what happened.
    ///
    /// # Behavior
    ///
    /// 1. Fetches the listing and extracts its `.json` links, whatever its status
    /// 2. Creates the download directory
    /// 3. Downloads every link; failures are recorded, not propagated
    /// 4. Writes the index and the changes CSV over `manifest_folder`; each one
    ///    may fail on its own without affecting the other
    ///
    /// # Errors
    ///
    /// Only the first two steps abort the run: a listing request that cannot be
    /// sent (`NetworkError`) or an uncreatable download directory
    /// (`FilesystemError`). No manifest is written in that case. A listing that
    /// answers with an error status is scanned as-is and the run goes on.
    pub async fn run(&self) -> AppResult<RunReport> {
        let links = fetch_listing(&self.fetcher, &self.base_url).await?;
        ensure_download_dir(&self.config.download_dir).await?;

        let downloads = download_all(
            &self.fetcher,
            &self.base_url,
            &links,
            &self.config.download_dir,
            self.config.concurrent_downloads,
        )
        .await;

        let (index, changes) = self.write_manifests();

        info!(
            links_found = links.len(),
            downloaded = downloads.succeeded(),
            failed = downloads.failed(),
            "Run completed"
        );

        Ok(RunReport {
            links_found: links.len(),
            downloads,
            index,
            changes,
        })
    }

    /// Writes both manifests over the configured folder.
    pub fn write_manifests(&self) -> (ManifestOutcome, ManifestOutcome) {
        let folder = &self.config.manifest_folder;
        if *folder != self.config.download_dir {
            warn!(
                manifest_folder = %folder.display(),
                download_dir = %self.config.download_dir.display(),
                "Manifests are generated from a different folder than downloads"
            );
        }

        let index = write_index(folder, &self.config.index_path);
        if let Err(e) = &index {
            warn!(error = %e, "Failed to write index");
        }
        let changes = write_changes_csv(folder, &self.config.changes_path);
        if let Err(e) = &changes {
            warn!(error = %e, "Failed to write changes CSV");
        }

        (ManifestOutcome::from(&index), ManifestOutcome::from(&changes))
    }
}
