use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToggleError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Page reload failed: {0}")]
    Reload(String),
}

pub type Result<T> = std::result::Result<T, ToggleError>;
