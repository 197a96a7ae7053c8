use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A training configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Input and expected-output tables do not describe a usable training set.
    #[error("invalid training set: {0}")]
    InvalidTrainingSet(String),

    /// The requested functionality is not provided by this crate.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
