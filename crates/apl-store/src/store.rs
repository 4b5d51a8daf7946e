use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use tracing::trace;

use apl_types::{AssetKind, AssetPayload, Blob, ImageHandle};

#[derive(Default)]
pub(crate) struct Buckets {
    pub(crate) texts: HashMap<String, String>,
    pub(crate) images: HashMap<String, ImageHandle>,
    pub(crate) binaries: HashMap<String, Blob>,
    pub(crate) audio: HashSet<String>,
}

/// Per-kind url mappings for loaded assets.
///
/// All four mappings sit behind one `RwLock`, so a lookup never observes a
/// half-applied insert.
pub struct AssetStore {
    pub(crate) buckets: RwLock<Buckets>,
}

impl AssetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            buckets: RwLock::new(Buckets::default()),
        }
    }

    /// Route a loaded payload into the mapping for its kind.
    pub fn insert(&self, url: impl Into<String>, payload: AssetPayload) {
        let url = url.into();
        let kind = payload.kind();
        let mut buckets = self.buckets.write().expect("lock poisoned");
        match payload {
            AssetPayload::Text(text) => {
                buckets.texts.insert(url.clone(), text);
            }
            AssetPayload::Image(handle) => {
                buckets.images.insert(url.clone(), handle);
            }
            AssetPayload::Binary(blob) => {
                buckets.binaries.insert(url.clone(), blob);
            }
            AssetPayload::Audio => {
                buckets.audio.insert(url.clone());
            }
        }
        trace!(%url, %kind, "asset stored");
    }

    /// Text content stored under `url`.
    pub fn text(&self, url: &str) -> Option<String> {
        self.buckets.read().expect("lock poisoned").texts.get(url).cloned()
    }

    /// Image handle stored under `url`.
    pub fn image(&self, url: &str) -> Option<ImageHandle> {
        self.buckets.read().expect("lock poisoned").images.get(url).cloned()
    }

    /// Binary blob stored under `url`.
    pub fn binary(&self, url: &str) -> Option<Blob> {
        self.buckets
            .read()
            .expect("lock poisoned")
            .binaries
            .get(url)
            .cloned()
    }

    /// Sorted urls stored for `kind`. Directories are never stored.
    pub fn urls(&self, kind: AssetKind) -> Vec<String> {
        let buckets = self.buckets.read().expect("lock poisoned");
        let mut urls: Vec<String> = match kind {
            AssetKind::Text => buckets.texts.keys().cloned().collect(),
            AssetKind::Image => buckets.images.keys().cloned().collect(),
            AssetKind::Binary => buckets.binaries.keys().cloned().collect(),
            AssetKind::Audio => buckets.audio.iter().cloned().collect(),
            AssetKind::Directory => Vec::new(),
        };
        urls.sort();
        urls
    }

    /// Number of stored assets across all mappings.
    pub fn len(&self) -> usize {
        let buckets = self.buckets.read().expect("lock poisoned");
        buckets.texts.len() + buckets.images.len() + buckets.binaries.len() + buckets.audio.len()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AssetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let buckets = self.buckets.read().expect("lock poisoned");
        f.debug_struct("AssetStore")
            .field("texts", &buckets.texts.len())
            .field("images", &buckets.images.len())
            .field("binaries", &buckets.binaries.len())
            .field("audio", &buckets.audio.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_routes_by_kind() {
        let store = AssetStore::new();
        store.insert("a.txt", AssetPayload::Text("hi".into()));
        store.insert("b.png", AssetPayload::Image(ImageHandle::new("b.png", vec![1u8])));
        store.insert("c.bin", AssetPayload::Binary(Blob::new(vec![1u8, 2])));
        store.insert("d.ogg", AssetPayload::Audio);

        assert_eq!(store.len(), 4);
        assert_eq!(store.text("a.txt").as_deref(), Some("hi"));
        assert_eq!(store.image("b.png").unwrap().source(), "b.png");
        assert_eq!(store.binary("c.bin").unwrap().length(), 2);
        assert_eq!(store.urls(AssetKind::Audio), vec!["d.ogg".to_string()]);
    }

    #[test]
    fn last_writer_wins_within_a_kind() {
        let store = AssetStore::new();
        store.insert("a.txt", AssetPayload::Text("old".into()));
        store.insert("a.txt", AssetPayload::Text("new".into()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.text("a.txt").as_deref(), Some("new"));
    }

    #[test]
    fn cross_kind_duplicates_are_independent() {
        let store = AssetStore::new();
        store.insert("same", AssetPayload::Text("t".into()));
        store.insert("same", AssetPayload::Audio);
        assert_eq!(store.len(), 2);
        assert_eq!(store.urls(AssetKind::Text), vec!["same".to_string()]);
        assert_eq!(store.urls(AssetKind::Audio), vec!["same".to_string()]);
    }

    #[test]
    fn urls_are_sorted_and_directories_empty() {
        let store = AssetStore::new();
        store.insert("z.txt", AssetPayload::Text(String::new()));
        store.insert("a.txt", AssetPayload::Text(String::new()));
        assert_eq!(
            store.urls(AssetKind::Text),
            vec!["a.txt".to_string(), "z.txt".to_string()]
        );
        assert!(store.urls(AssetKind::Directory).is_empty());
    }

    #[test]
    fn new_store_is_empty() {
        let store = AssetStore::default();
        assert!(store.is_empty());
        assert!(store.text("anything").is_none());
    }
}
