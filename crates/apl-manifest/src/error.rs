use std::path::PathBuf;

/// Errors from manifest generation.
///
/// Decoding itself never fails; malformed lines are dropped.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The scan root does not exist or is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A path under the scan root could not be expressed as a manifest url.
    #[error("invalid asset path: {0}")]
    InvalidPath(PathBuf),

    /// Directory traversal failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Convenience alias for manifest results.
pub type ManifestResult<T> = Result<T, ManifestError>;
