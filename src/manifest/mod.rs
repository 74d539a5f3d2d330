//! Manifest generation over a local folder.
//!
//! Writes `index.txt` and `changes.csv` from a non-recursive listing of one folder.

mod file_finder;
mod writer;

// Re-export public API
pub use file_finder::scan_folder;
pub use writer::{write_changes_csv, write_index};
