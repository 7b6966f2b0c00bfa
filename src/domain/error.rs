use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Spreadsheet access error: {0}")]
    Access(String),

    #[error("Email delivery error: {0}")]
    Delivery(String),
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Config(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::Config(s.to_string())
    }
}
