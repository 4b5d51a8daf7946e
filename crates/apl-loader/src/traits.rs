use async_trait::async_trait;

use apl_types::{AssetKind, AssetPayload, Blob, ImageHandle};

use crate::error::LoadResult;

// ---------------------------------------------------------------------------
// Fetch capabilities
// ---------------------------------------------------------------------------

/// Fetches a text resource. Also used for the manifest itself.
#[async_trait]
pub trait TextFetch: Send + Sync {
    async fn fetch_text(&self, url: &str) -> LoadResult<String>;
}

/// Fetches an image resource as an opaque handle.
#[async_trait]
pub trait ImageFetch: Send + Sync {
    async fn fetch_image(&self, url: &str) -> LoadResult<ImageHandle>;
}

/// Fetches a binary resource.
#[async_trait]
pub trait BinaryFetch: Send + Sync {
    async fn fetch_binary(&self, url: &str) -> LoadResult<Blob>;
}

/// Fetches an audio resource. Success carries no payload.
#[async_trait]
pub trait AudioFetch: Send + Sync {
    async fn fetch_audio(&self, url: &str) -> LoadResult<()>;
}

// ---------------------------------------------------------------------------
// AssetLoader
// ---------------------------------------------------------------------------

/// Uniform loader interface the preload coordinator dispatches through.
///
/// Each call settles exactly once, either with the typed payload or with the
/// error that prevented it. Loaders never retry.
#[async_trait]
pub trait AssetLoader: Send + Sync {
    /// The asset kind this loader produces.
    fn kind(&self) -> AssetKind;

    /// Load the resource at `url`.
    async fn load(&self, url: &str) -> LoadResult<AssetPayload>;
}
