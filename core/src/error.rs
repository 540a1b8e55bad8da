use thiserror::Error;

/// Main error type for EatClub
#[derive(Debug, Error)]
pub enum EatClubError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Task failed: {0}")]
    Task(String),
}

/// Result type alias using EatClubError
pub type Result<T> = std::result::Result<T, EatClubError>;
