use std::io;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::trace;

use apl_types::{Blob, ImageHandle};

use crate::error::{LoadError, LoadResult};
use crate::traits::{AudioFetch, BinaryFetch, ImageFetch, TextFetch};

/// Filesystem fetch backend.
///
/// Urls are treated as `/`-separated paths, resolved against `root` when one
/// is set and against the working directory otherwise. With a root, urls that
/// are absolute or climb out through `..` are rejected with
/// [`LoadError::OutsideRoot`]. Without one, urls are used as given.
#[derive(Clone, Debug, Default)]
pub struct FsFetcher {
    root: Option<PathBuf>,
}

impl FsFetcher {
    /// Resolve urls against the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve urls against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// The filesystem path a url maps to.
    pub fn resolve(&self, url: &str) -> LoadResult<PathBuf> {
        let Some(root) = &self.root else {
            return Ok(PathBuf::from(url));
        };
        let relative = Path::new(url);
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            return Err(LoadError::OutsideRoot(url.to_string()));
        }
        Ok(root.join(relative))
    }

    async fn read(&self, url: &str) -> LoadResult<Vec<u8>> {
        let path = self.resolve(url)?;
        trace!(url, path = %path.display(), "reading asset");
        tokio::fs::read(&path).await.map_err(|e| not_found_or_io(url, e))
    }
}

fn not_found_or_io(url: &str, err: io::Error) -> LoadError {
    if err.kind() == io::ErrorKind::NotFound {
        LoadError::NotFound(url.to_string())
    } else {
        LoadError::Io(err)
    }
}

#[async_trait]
impl TextFetch for FsFetcher {
    async fn fetch_text(&self, url: &str) -> LoadResult<String> {
        let data = self.read(url).await?;
        String::from_utf8(data).map_err(|_| LoadError::InvalidUtf8 {
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl ImageFetch for FsFetcher {
    async fn fetch_image(&self, url: &str) -> LoadResult<ImageHandle> {
        let data = self.read(url).await?;
        Ok(ImageHandle::new(url, data))
    }
}

#[async_trait]
impl BinaryFetch for FsFetcher {
    async fn fetch_binary(&self, url: &str) -> LoadResult<Blob> {
        let data = self.read(url).await?;
        Ok(Blob::new(data))
    }
}

#[async_trait]
impl AudioFetch for FsFetcher {
    /// Audio is only checked for presence; the file is not read.
    async fn fetch_audio(&self, url: &str) -> LoadResult<()> {
        let path = self.resolve(url)?;
        let meta = tokio::fs::metadata(&path)
            .await
            .map_err(|e| not_found_or_io(url, e))?;
        if meta.is_file() {
            Ok(())
        } else {
            Err(LoadError::NotFound(url.to_string()))
        }
    }
}
