//! vex-mirror library
//!
//! This crate provides the core functionality for the `vex-mirror` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle the stages of the mirror run:
//!
//! - [`downloader`] - Fetches the listing page, extracts `.json` links and downloads each file
//! - [`manifest`] - Writes `index.txt` and `changes.csv` from a local folder
//! - [`pipeline`] - Sequences the stages and reports per-download outcomes
//! - [`cli`] - Command-line interface and configuration loading
//! - [`models`] - Download tasks, outcomes and manifest entries
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use vex_mirror::{config::ResolvedConfig, downloader::HttpFetcher, errors::AppResult};
//! use vex_mirror::pipeline::Pipeline;
//!
//! # async fn example() -> AppResult<()> {
//! let pipeline = Pipeline::new(ResolvedConfig::default(), HttpFetcher::new())?;
//! let report = pipeline.run().await?;
//! println!("{} of {} files downloaded", report.downloads.succeeded(), report.links_found);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod downloader;
pub mod errors;
pub mod logging;
pub mod manifest;
pub mod models;
pub mod pipeline;
