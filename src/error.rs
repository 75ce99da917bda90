use thiserror::Error;

#[derive(Debug, Error)]
pub enum VibeError {
    /// The theme registry was asked for an id it does not hold.
    /// The classifier can never produce one, so this is an internal fault.
    #[error("unknown theme id '{0}'")]
    UnknownTheme(String),

    #[error("session '{0}' not found")]
    SessionNotFound(String),

    #[error("no text to analyze")]
    EmptyText,

    #[error("top-k must be between 1 and {max}, got {value}")]
    InvalidTopK { value: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, VibeError>;
