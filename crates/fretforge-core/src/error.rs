use thiserror::Error;

#[derive(Error, Debug)]
pub enum FretForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Step {step} has no playable fingering on this instrument")]
    UnrealizableStep { step: usize },

    #[error("Solve cancelled before the search phase")]
    Cancelled,
}

pub type FfResult<T> = Result<T, FretForgeError>;
