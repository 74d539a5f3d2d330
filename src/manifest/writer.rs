use super::file_finder::scan_folder;
use crate::errors::{AppError, AppResult};
use crate::models::ManifestEntry;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writes `<folder>/<filename>` per line for every file directly in `folder`.
///
/// `output` is created or truncated. Rows follow the filesystem's listing order.
/// Returns the number of rows written.
///
/// # Errors
///
/// `DirectoryReadError` if the folder cannot be listed, `FileCreateError` if
/// `output` cannot be created, `WriteError` if a row cannot be written.
pub fn write_index(folder: &Path, output: &Path) -> AppResult<usize> {
    let rows = write_manifest(folder, output, ManifestEntry::index_line)?;
    info!(file = %output.display(), rows = rows, "Index written");
    Ok(rows)
}

/// Writes `"<folder>/<filename>","<RFC3339 mtime>"` per line for every file
/// directly in `folder`. No header row; quotes inside names are not escaped.
///
/// Scans the folder on its own; it does not read the index.
pub fn write_changes_csv(folder: &Path, output: &Path) -> AppResult<usize> {
    let rows = write_manifest(folder, output, ManifestEntry::csv_row)?;
    info!(file = %output.display(), rows = rows, "Changes CSV written");
    Ok(rows)
}

fn write_manifest(
    folder: &Path,
    output: &Path,
    render: fn(&ManifestEntry) -> String,
) -> AppResult<usize> {
    let entries = scan_folder(folder)?;

    let file = File::create(output)
        .map_err(|e| AppError::FileCreateError(format!("{}: {}", output.display(), e)))?;
    let mut writer = BufWriter::new(file);

    let write_error =
        |e: std::io::Error| AppError::WriteError(format!("{}: {}", output.display(), e));
    for entry in &entries {
        writer.write_all(render(entry).as_bytes()).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    Ok(entries.len())
}
