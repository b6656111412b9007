use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No data for {0}")]
    DataUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Storage(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::InvalidInput(s.to_string())
    }
}
