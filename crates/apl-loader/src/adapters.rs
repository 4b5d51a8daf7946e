use std::sync::Arc;

use async_trait::async_trait;

use apl_types::{AssetKind, AssetPayload};

use crate::error::LoadResult;
use crate::traits::{AssetLoader, AudioFetch, BinaryFetch, ImageFetch, TextFetch};

/// Loads text assets through a [`TextFetch`] capability.
pub struct TextLoader {
    fetch: Arc<dyn TextFetch>,
}

impl TextLoader {
    pub fn new(fetch: Arc<dyn TextFetch>) -> Self {
        Self { fetch }
    }
}

#[async_trait]
impl AssetLoader for TextLoader {
    fn kind(&self) -> AssetKind {
        AssetKind::Text
    }

    async fn load(&self, url: &str) -> LoadResult<AssetPayload> {
        self.fetch.fetch_text(url).await.map(AssetPayload::Text)
    }
}

/// Loads image assets through an [`ImageFetch`] capability.
pub struct ImageLoader {
    fetch: Arc<dyn ImageFetch>,
}

impl ImageLoader {
    pub fn new(fetch: Arc<dyn ImageFetch>) -> Self {
        Self { fetch }
    }
}

#[async_trait]
impl AssetLoader for ImageLoader {
    fn kind(&self) -> AssetKind {
        AssetKind::Image
    }

    async fn load(&self, url: &str) -> LoadResult<AssetPayload> {
        self.fetch.fetch_image(url).await.map(AssetPayload::Image)
    }
}

/// Loads binary assets through a [`BinaryFetch`] capability.
pub struct BinaryLoader {
    fetch: Arc<dyn BinaryFetch>,
}

impl BinaryLoader {
    pub fn new(fetch: Arc<dyn BinaryFetch>) -> Self {
        Self { fetch }
    }
}

#[async_trait]
impl AssetLoader for BinaryLoader {
    fn kind(&self) -> AssetKind {
        AssetKind::Binary
    }

    async fn load(&self, url: &str) -> LoadResult<AssetPayload> {
        self.fetch.fetch_binary(url).await.map(AssetPayload::Binary)
    }
}

/// Loads audio assets through an [`AudioFetch`] capability.
pub struct AudioLoader {
    fetch: Arc<dyn AudioFetch>,
}

impl AudioLoader {
    pub fn new(fetch: Arc<dyn AudioFetch>) -> Self {
        Self { fetch }
    }
}

#[async_trait]
impl AssetLoader for AudioLoader {
    fn kind(&self) -> AssetKind {
        AssetKind::Audio
    }

    async fn load(&self, url: &str) -> LoadResult<AssetPayload> {
        self.fetch.fetch_audio(url).await.map(|()| AssetPayload::Audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::memory::InMemoryFetcher;

    fn fetcher() -> Arc<InMemoryFetcher> {
        let f = InMemoryFetcher::new();
        f.insert("a.txt", "hi");
        f.insert("a.png", vec![0x89u8, b'P', b'N', b'G']);
        f.insert("a.bin", vec![1u8, 2, 3]);
        f.insert("a.ogg", vec![0u8; 16]);
        Arc::new(f)
    }

    #[tokio::test]
    async fn text_adapter_wraps_string() {
        let loader = TextLoader::new(fetcher());
        assert_eq!(loader.kind(), AssetKind::Text);
        let payload = loader.load("a.txt").await.unwrap();
        assert_eq!(payload, AssetPayload::Text("hi".into()));
    }

    #[tokio::test]
    async fn image_adapter_keeps_source() {
        let loader = ImageLoader::new(fetcher());
        match loader.load("a.png").await.unwrap() {
            AssetPayload::Image(handle) => {
                assert_eq!(handle.source(), "a.png");
                assert_eq!(handle.encoded().len(), 4);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[tokio::test]
    async fn binary_adapter_wraps_blob() {
        let loader = BinaryLoader::new(fetcher());
        match loader.load("a.bin").await.unwrap() {
            AssetPayload::Binary(blob) => assert_eq!(blob.length(), 3),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[tokio::test]
    async fn audio_adapter_has_no_payload() {
        let loader = AudioLoader::new(fetcher());
        assert_eq!(loader.load("a.ogg").await.unwrap(), AssetPayload::Audio);
    }

    #[tokio::test]
    async fn adapters_pass_failures_through() {
        let loader = BinaryLoader::new(fetcher());
        let err = loader.load("missing.bin").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound(url) if url == "missing.bin"));
    }
}
