use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CHANGES_FILE, DEFAULT_DOWNLOAD_DIR, DEFAULT_INDEX_FILE,
};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Resolved configuration with all values filled in (no Options).
///
/// This struct represents the pipeline defaults and can be deserialized by the TOML
/// loader. Keys missing from the file keep their default value.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Listing page; every discovered link is resolved against it
    pub base_url: String,
    /// Directory downloaded files are written to
    pub download_dir: PathBuf,
    /// Directory scanned when writing the manifests
    pub manifest_folder: PathBuf,
    /// Output path of the plain index
    pub index_path: PathBuf,
    /// Output path of the CSV with modification timestamps
    pub changes_path: PathBuf,
    /// Number of downloads in flight at once (1 keeps discovery order strictly sequential)
    pub concurrent_downloads: usize,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            manifest_folder: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            index_path: PathBuf::from(DEFAULT_INDEX_FILE),
            changes_path: PathBuf::from(DEFAULT_CHANGES_FILE),
            concurrent_downloads: 1,
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Rejects unknown keys to prevent typos from being silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `InvalidInput` if the TOML is
    /// malformed, unknown keys are present, or a value fails validation.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Checks that the values can drive a run.
    pub fn validate(&self) -> AppResult<()> {
        if self.concurrent_downloads == 0 {
            return Err(AppError::InvalidInput(
                "Concurrent downloads must be greater than 0".into(),
            ));
        }
        self.base_url()?;
        Ok(())
    }

    /// Parses `base_url`, appending a trailing `/` so that links join beneath it
    /// instead of replacing its last path segment.
    pub fn base_url(&self) -> AppResult<Url> {
        let mut url = Url::parse(self.base_url.trim())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::UrlError(format!(
                "Unsupported scheme '{}' in {}",
                url.scheme(),
                self.base_url
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
