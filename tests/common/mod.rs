//! Common test utilities for integration tests

use std::fs;
use std::io::Write;
use std::path::Path;
use vex_mirror::config::ResolvedConfig;

/// Helper function to create a test file in a directory
#[allow(dead_code)]
pub fn create_test_file(path: &Path, content: &str) {
    let parent = path.parent().unwrap();
    fs::create_dir_all(parent).unwrap();
    fs::File::create(path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
}

/// Config that keeps every output under `root` and fetches from `base_url`.
#[allow(dead_code)]
pub fn config_under(root: &Path, base_url: &str) -> ResolvedConfig {
    ResolvedConfig {
        base_url: base_url.to_string(),
        download_dir: root.join("downloaded_files"),
        manifest_folder: root.join("downloaded_files"),
        index_path: root.join("index.txt"),
        changes_path: root.join("changes.csv"),
        concurrent_downloads: 1,
    }
}

/// Non-empty lines of a manifest, sorted (listing order is platform dependent).
#[allow(dead_code)]
pub fn sorted_lines(path: &Path) -> Vec<String> {
    let mut lines: Vec<String> = fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}

/// Listing page in the style of an Apache autoindex for the advisory folder
#[allow(dead_code)]
pub const SAMPLE_LISTING: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 3.2 Final//EN">
<html>
 <head>
  <title>Index of /security/data/csaf/beta/vex/2022</title>
 </head>
 <body>
<h1>Index of /security/data/csaf/beta/vex/2022</h1>
<pre><a href="?C=N;O=D">Name</a>                    <a href="?C=M;O=A">Last modified</a>      <a href="?C=S;O=A">Size</a>
<hr><a href="/security/data/csaf/beta/vex/">Parent Directory</a>                             -
<a href="cve-2022-0001.json">cve-2022-0001.json</a>      2023-03-01 10:00  12K
<a href="cve-2022-0002.json">cve-2022-0002.json</a>      2023-03-01 10:00  9.1K
<a href="cve-2022-0003.json">cve-2022-0003.json</a>      2023-03-01 10:00  4.0K
<a href="index.txt">index.txt</a>               2023-03-01 10:00  100
<hr></pre>
</body></html>
"#;

/// File names listed in [`SAMPLE_LISTING`]
#[allow(dead_code)]
pub const SAMPLE_FILES: &[&str] = &[
    "cve-2022-0001.json",
    "cve-2022-0002.json",
    "cve-2022-0003.json",
];
