use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("unknown parameters: {0}")]
    UnknownArgument(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;
