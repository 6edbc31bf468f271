use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("Unknown sort algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Algorithm index {index} out of range (registry holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid value bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: i32, max: i32 },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SortError {
    fn from(err: serde_json::Error) -> Self {
        SortError::Config(err.to_string())
    }
}
