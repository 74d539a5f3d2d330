use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// HTTP request failed or returned a non-success status
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Destination file or directory could not be created
    #[error("Filesystem error: {0}")]
    FilesystemError(String),
    /// Reading or copying a stream failed
    #[error("IO error: {0}")]
    IoError(String),
    /// A directory could not be opened or listed
    #[error("Directory read error: {0}")]
    DirectoryReadError(String),
    /// A manifest file could not be created
    #[error("File create error: {0}")]
    FileCreateError(String),
    /// Writing a manifest row failed
    #[error("Write error: {0}")]
    WriteError(String),
    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlError(String),
    /// Invalid input format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// Conversion implementations for common errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn test_network_error_display() {
        let err = AppError::NetworkError("Connection refused".to_string());
        assert!(err.to_string().contains("Network error"));
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_manifest_error_display() {
        let err = AppError::DirectoryReadError("2022: not found".to_string());
        assert_eq!(err.to_string(), "Directory read error: 2022: not found");

        let err = AppError::FileCreateError("index.txt".to_string());
        assert!(err.to_string().starts_with("File create error"));

        let err = AppError::WriteError("disk full".to_string());
        assert!(err.to_string().starts_with("Write error"));
    }

    #[test]
    fn test_url_parse_error_converts() {
        let err: AppError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, AppError::UrlError(_)));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::IoError(ref msg) if msg == "boom"));
    }

    #[test]
    fn test_app_error_implements_error_trait() {
        use std::error::Error;
        let err: Box<dyn Error> = Box::new(AppError::FilesystemError("test".to_string()));
        assert!(!err.to_string().is_empty());
    }
}
