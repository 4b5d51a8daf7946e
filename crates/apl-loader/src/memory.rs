use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use bytes::Bytes;

use apl_types::{Blob, ImageHandle};

use crate::error::{LoadError, LoadResult};
use crate::traits::{AudioFetch, BinaryFetch, ImageFetch, TextFetch};

/// In-memory fetch backend serving every asset kind from a url → bytes map.
///
/// Intended for tests and embedding. Every request is recorded, so callers can
/// check which urls were actually fetched.
pub struct InMemoryFetcher {
    resources: RwLock<HashMap<String, Bytes>>,
    requests: Mutex<Vec<String>>,
}

impl InMemoryFetcher {
    /// Create an empty fetcher. Every url fails with `NotFound` until inserted.
    pub fn new() -> Self {
        Self {
            resources: RwLock::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Serve `data` at `url`, replacing anything already there.
    pub fn insert(&self, url: impl Into<String>, data: impl Into<Bytes>) {
        self.resources
            .write()
            .expect("lock poisoned")
            .insert(url.into(), data.into());
    }

    /// Stop serving `url`. Returns `true` if it was present.
    pub fn remove(&self, url: &str) -> bool {
        self.resources
            .write()
            .expect("lock poisoned")
            .remove(url)
            .is_some()
    }

    /// Urls requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("lock poisoned").clone()
    }

    fn get(&self, url: &str) -> LoadResult<Bytes> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .push(url.to_string());
        self.resources
            .read()
            .expect("lock poisoned")
            .get(url)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(url.to_string()))
    }
}

impl Default for InMemoryFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.resources.read().expect("lock poisoned").len();
        f.debug_struct("InMemoryFetcher")
            .field("resource_count", &count)
            .finish()
    }
}

#[async_trait]
impl TextFetch for InMemoryFetcher {
    async fn fetch_text(&self, url: &str) -> LoadResult<String> {
        let data = self.get(url)?;
        String::from_utf8(data.to_vec()).map_err(|_| LoadError::InvalidUtf8 {
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl ImageFetch for InMemoryFetcher {
    async fn fetch_image(&self, url: &str) -> LoadResult<ImageHandle> {
        let data = self.get(url)?;
        Ok(ImageHandle::new(url, data))
    }
}

#[async_trait]
impl BinaryFetch for InMemoryFetcher {
    async fn fetch_binary(&self, url: &str) -> LoadResult<Blob> {
        let data = self.get(url)?;
        Ok(Blob::new(data))
    }
}

#[async_trait]
impl AudioFetch for InMemoryFetcher {
    async fn fetch_audio(&self, url: &str) -> LoadResult<()> {
        self.get(url).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_inserted_text() {
        let fetcher = InMemoryFetcher::new();
        fetcher.insert("a.txt", "hello");
        assert_eq!(fetcher.fetch_text("a.txt").await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn missing_url_is_not_found() {
        let fetcher = InMemoryFetcher::new();
        let err = fetcher.fetch_binary("nope.bin").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[tokio::test]
    async fn invalid_utf8_text_fails() {
        let fetcher = InMemoryFetcher::new();
        fetcher.insert("bad.txt", vec![0xffu8, 0xfe]);
        let err = fetcher.fetch_text("bad.txt").await.unwrap_err();
        assert!(matches!(err, LoadError::InvalidUtf8 { url } if url == "bad.txt"));
        // The same bytes are fine as binary.
        assert_eq!(fetcher.fetch_binary("bad.txt").await.unwrap().length(), 2);
    }

    #[tokio::test]
    async fn records_requests_in_order() {
        let fetcher = InMemoryFetcher::new();
        fetcher.insert("a.ogg", vec![0u8]);
        fetcher.fetch_audio("a.ogg").await.unwrap();
        let _ = fetcher.fetch_image("b.png").await;
        assert_eq!(fetcher.requests(), vec!["a.ogg".to_string(), "b.png".to_string()]);
    }

    #[tokio::test]
    async fn remove_stops_serving() {
        let fetcher = InMemoryFetcher::new();
        fetcher.insert("a.txt", "x");
        assert!(fetcher.remove("a.txt"));
        assert!(!fetcher.remove("a.txt"));
        assert!(fetcher.fetch_text("a.txt").await.is_err());
    }
}
