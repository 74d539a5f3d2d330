use crate::errors::{AppError, AppResult};
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use url::Url;

/// One link to fetch: where it comes from and where it lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub url: Url,
    pub destination: PathBuf,
}

impl DownloadTask {
    /// Builds the task for `link`, resolved against `base_url` and saved under
    /// `download_dir` by its base name.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the link cannot be joined onto the base URL, and
    /// `InvalidInput` if the link has no usable file name (e.g. `..`).
    pub fn from_link(base_url: &Url, link: &str, download_dir: &Path) -> AppResult<Self> {
        let url = base_url.join(link)?;
        let file_name = Path::new(link)
            .file_name()
            .ok_or_else(|| AppError::InvalidInput(format!("Link has no file name: {link}")))?;

        Ok(Self {
            url,
            destination: download_dir.join(file_name),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStatus {
    Succeeded { bytes: u64 },
    Failed { reason: String },
}

/// Result of one download attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub link: String,
    /// `None` when the link could not be turned into a URL
    pub url: Option<Url>,
    pub destination: Option<PathBuf>,
    pub status: DownloadStatus,
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, DownloadStatus::Succeeded { .. })
    }
}

/// Per-link outcomes, kept in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub outcomes: Vec<DownloadOutcome>,
}

impl DownloadReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DownloadOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

/// A file found in the scanned folder, as it is rendered into the manifests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub relative_folder: String,
    pub file_name: String,
    pub last_modified: DateTime<Utc>,
}

impl ManifestEntry {
    /// `<folder>/<file>`, always joined with a forward slash.
    pub fn path(&self) -> String {
        format!("{}/{}", self.relative_folder, self.file_name)
    }

    pub fn index_line(&self) -> String {
        format!("{}\n", self.path())
    }

    /// Quote characters inside the path are written as-is.
    pub fn csv_row(&self) -> String {
        format!(
            "\"{}\",\"{}\"\n",
            self.path(),
            self.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestOutcome {
    Written { rows: usize },
    Failed { reason: String },
}

impl ManifestOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

impl From<&AppResult<usize>> for ManifestOutcome {
    fn from(result: &AppResult<usize>) -> Self {
        match result {
            Ok(rows) => Self::Written { rows: *rows },
            Err(e) => Self::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// Everything a single pipeline run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub links_found: usize,
    pub downloads: DownloadReport,
    pub index: ManifestOutcome,
    pub changes: ManifestOutcome,
}

impl RunReport {
    /// Both manifests, labelled, index first.
    pub fn manifests(&self) -> [(&'static str, &ManifestOutcome); 2] {
        [("index", &self.index), ("changes", &self.changes)]
    }

    /// True when every download succeeded and both manifests were written.
    pub fn is_complete(&self) -> bool {
        self.downloads.failed() == 0 && self.index.is_written() && self.changes.is_written()
    }
}
