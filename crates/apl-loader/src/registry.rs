use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use apl_types::AssetKind;

use crate::adapters::{AudioLoader, BinaryLoader, ImageLoader, TextLoader};
use crate::traits::{AssetLoader, AudioFetch, BinaryFetch, ImageFetch, TextFetch};

/// Maps each asset kind to the loader that handles it.
///
/// The text capability is kept separately as well, because the manifest is
/// fetched through it before any entry is dispatched.
#[derive(Clone, Default)]
pub struct LoaderRegistry {
    loaders: HashMap<AssetKind, Arc<dyn AssetLoader>>,
    text: Option<Arc<dyn TextFetch>>,
}

impl LoaderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register all four typed loaders over a single backend.
    pub fn with_fetcher<F>(fetcher: Arc<F>) -> Self
    where
        F: TextFetch + ImageFetch + BinaryFetch + AudioFetch + 'static,
    {
        Self::new()
            .with_text(fetcher.clone())
            .with_image(fetcher.clone())
            .with_binary(fetcher.clone())
            .with_audio(fetcher)
    }

    /// Use `fetch` both for text entries and for manifests.
    pub fn with_text(mut self, fetch: Arc<dyn TextFetch>) -> Self {
        self.text = Some(fetch.clone());
        self.register(Arc::new(TextLoader::new(fetch)));
        self
    }

    pub fn with_image(mut self, fetch: Arc<dyn ImageFetch>) -> Self {
        self.register(Arc::new(ImageLoader::new(fetch)));
        self
    }

    pub fn with_binary(mut self, fetch: Arc<dyn BinaryFetch>) -> Self {
        self.register(Arc::new(BinaryLoader::new(fetch)));
        self
    }

    pub fn with_audio(mut self, fetch: Arc<dyn AudioFetch>) -> Self {
        self.register(Arc::new(AudioLoader::new(fetch)));
        self
    }

    /// Register a loader under its own kind, replacing any previous one.
    ///
    /// Only entry loading changes. Manifests keep coming from the capability
    /// given to [`with_text`](Self::with_text), so a registry built from
    /// `register` alone cannot fetch a manifest.
    pub fn register(&mut self, loader: Arc<dyn AssetLoader>) {
        self.loaders.insert(loader.kind(), loader);
    }

    /// The loader responsible for `kind`, if any.
    pub fn get(&self, kind: AssetKind) -> Option<Arc<dyn AssetLoader>> {
        self.loaders.get(&kind).cloned()
    }

    /// The text capability used to fetch manifests.
    pub fn text_fetch(&self) -> Option<Arc<dyn TextFetch>> {
        self.text.clone()
    }

    /// Kinds with a registered loader, sorted.
    pub fn kinds(&self) -> Vec<AssetKind> {
        let mut kinds: Vec<AssetKind> = self.loaders.keys().copied().collect();
        kinds.sort();
        kinds
    }
}

impl fmt::Debug for LoaderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderRegistry")
            .field("kinds", &self.kinds())
            .field("has_text_fetch", &self.text.is_some())
            .finish()
    }
}
