//! Listing and download operations for advisory files.
//!
//! This module fetches the listing page, extracts the `.json` links it contains and
//! downloads each file. The main entry points are [`fetch_listing`] and [`download_all`].

mod fetcher;
mod file_downloader;
mod link_extractor;
mod link_fetcher;

// Re-export public API
pub use fetcher::{Fetcher, HttpFetcher, Page};
pub use file_downloader::{download_all, download_link, ensure_download_dir};
pub use link_extractor::extract_json_links;
pub use link_fetcher::fetch_listing;
