//! Error taxonomy shared by the flows, storage, and configuration layers.

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// A required field was empty or nothing was selected. Raised before storage is touched.
    #[error("{0}")]
    Validation(String),

    /// Any storage failure; carries the driver message verbatim.
    #[error("{0}")]
    Persistence(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Persistence(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::FileSystem(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn test_persistence_error_keeps_driver_message_verbatim() {
        let err: AppError = rusqlite::Error::InvalidQuery.into();
        assert_eq!(
            err.to_string(),
            rusqlite::Error::InvalidQuery.to_string(),
            "persistence errors should surface the storage message unchanged"
        );
    }

    #[test]
    fn test_validation_error_displays_user_prompt() {
        let err = AppError::validation("Please enter a playlist name.");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please enter a playlist name.");
    }

    #[test]
    fn test_config_error_is_prefixed() {
        let err = AppError::Config("bad key".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad key");
        assert!(!err.is_validation());
    }
}
