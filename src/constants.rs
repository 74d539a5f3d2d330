// Data source
pub const DEFAULT_BASE_URL: &str = "https://access.redhat.com/security/data/csaf/beta/vex/2022/";

// Local paths
pub const DEFAULT_DOWNLOAD_DIR: &str = "downloaded_files";
pub const DEFAULT_INDEX_FILE: &str = "index.txt";
pub const DEFAULT_CHANGES_FILE: &str = "changes.csv";

// Link extraction
pub const JSON_SUFFIX: &str = ".json";
