use crate::errors::{AppError, AppResult};
use crate::models::ManifestEntry;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Lists the files directly inside `folder`.
///
/// Subdirectories are skipped and never descended into. Entries are classified
/// without following symlinks, so a symlink is listed like a file. The result keeps
/// the order the filesystem returns entries in, which is not sorted and differs
/// between platforms.
///
/// # Errors
///
/// Returns `DirectoryReadError` if the folder cannot be opened or an entry's
/// metadata cannot be read.
pub fn scan_folder(folder: &Path) -> AppResult<Vec<ManifestEntry>> {
    let read_error =
        |e: std::io::Error| AppError::DirectoryReadError(format!("{}: {}", folder.display(), e));

    let relative_folder = folder_label(folder);
    let mut out = Vec::new();

    for entry in std::fs::read_dir(folder).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let metadata = entry.metadata().map_err(read_error)?;
        if metadata.is_dir() {
            continue;
        }
        let modified = metadata.modified().map_err(read_error)?;
        out.push(ManifestEntry {
            relative_folder: relative_folder.clone(),
            file_name: entry.file_name().to_string_lossy().into_owned(),
            last_modified: DateTime::<Utc>::from(modified),
        });
    }

    Ok(out)
}

/// The folder as written in front of each file name, without a trailing slash.
fn folder_label(folder: &Path) -> String {
    folder.to_string_lossy().trim_end_matches('/').to_string()
}
