use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreloadError {
    #[error("a preload run is already in progress")]
    RunInProgress,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PreloadResult<T> = Result<T, PreloadError>;
