use thiserror::Error;

/// Errors a fetch capability can report for a single resource.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("resource is not valid UTF-8 text: {url}")]
    InvalidUtf8 { url: String },

    #[error("no loader registered for {0} assets")]
    NoLoader(apl_types::AssetKind),

    #[error("url escapes the asset root: {0}")]
    OutsideRoot(String),

    #[error("load did not complete: {0}")]
    Aborted(String),

    #[error("remote error: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;
