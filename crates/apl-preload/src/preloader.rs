use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use apl_loader::{LoadError, LoadResult, LoaderRegistry, TextFetch};
use apl_manifest::decode;
use apl_store::AssetStore;
use apl_types::{AssetPayload, ManifestEntry};

use crate::callback::PreloadCallback;
use crate::config::PreloaderConfig;
use crate::error::{PreloadError, PreloadResult};

// ---------------------------------------------------------------------------
// RunState
// ---------------------------------------------------------------------------

/// Lifecycle of a preload run.
///
/// `Idle → FetchingManifest → ManifestFailed`, or
/// `Idle → FetchingManifest → Dispatching → Completed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    FetchingManifest,
    Dispatching,
    /// The manifest could not be fetched. `done` was not called.
    ManifestFailed,
    /// Every entry finished and `done` was called.
    Completed,
}

impl RunState {
    /// Returns `true` while a run is in flight.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::FetchingManifest | Self::Dispatching)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::FetchingManifest => "fetching-manifest",
            Self::Dispatching => "dispatching",
            Self::ManifestFailed => "manifest-failed",
            Self::Completed => "completed",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Finished-entry counter for the current run.
struct Progress {
    loaded: AtomicUsize,
    total: AtomicUsize,
}

impl Progress {
    fn new() -> Self {
        Self {
            loaded: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
        }
    }

    fn reset(&self, total: usize) {
        self.loaded.store(0, Ordering::SeqCst);
        self.total.store(total, Ordering::SeqCst);
    }

    /// Count one finished entry. Returns the new count and the run total.
    ///
    /// The increment and the read of the new value are a single atomic step,
    /// so exactly one caller sees `count == total`.
    fn advance(&self) -> (usize, usize) {
        let count = self.loaded.fetch_add(1, Ordering::SeqCst) + 1;
        (count, self.total.load(Ordering::SeqCst))
    }
}

// ---------------------------------------------------------------------------
// Preloader
// ---------------------------------------------------------------------------

/// Manifest-driven asset preloader.
///
/// Owns its [`AssetStore`] and progress counter; separate preloaders never
/// share either. One run may be in flight at a time. Lookups through
/// [`Preloader::store`] are safe during a run.
pub struct Preloader {
    config: PreloaderConfig,
    registry: LoaderRegistry,
    store: AssetStore,
    progress: Progress,
    state: Mutex<RunState>,
}

impl Preloader {
    pub fn new(config: PreloaderConfig, registry: LoaderRegistry) -> Self {
        Self {
            config,
            registry,
            store: AssetStore::new(),
            progress: Progress::new(),
            state: Mutex::new(RunState::Idle),
        }
    }

    pub fn builder() -> PreloaderBuilder {
        PreloaderBuilder::default()
    }

    pub fn config(&self) -> &PreloaderConfig {
        &self.config
    }

    pub fn registry(&self) -> &LoaderRegistry {
        &self.registry
    }

    /// Loaded assets, queried through [`apl_store::AssetLookup`].
    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    pub fn state(&self) -> RunState {
        *self.state.lock().expect("lock poisoned")
    }

    /// Entries finished so far in the current run.
    pub fn loaded(&self) -> usize {
        self.progress.loaded.load(Ordering::SeqCst)
    }

    /// Entry count of the current run.
    pub fn total(&self) -> usize {
        self.progress.total.load(Ordering::SeqCst)
    }

    /// Preload the configured manifest.
    pub async fn preload_default(
        &self,
        callback: &dyn PreloadCallback,
    ) -> PreloadResult<RunState> {
        let manifest = self.config.manifest.clone();
        self.preload(&manifest, callback).await
    }

    /// Fetch the manifest at `manifest_url`, load every entry it lists, and
    /// report progress through `callback`.
    ///
    /// All entry loads are started before any of them is awaited and may
    /// settle in any order. Finish steps (store insert, counter bump, callback)
    /// run one at a time on the task driving this future. Resolves once the
    /// run reaches a terminal state; a run whose loads never settle never
    /// resolves.
    ///
    /// Returns [`PreloadError::RunInProgress`] if another run is in flight.
    pub async fn preload(
        &self,
        manifest_url: &str,
        callback: &dyn PreloadCallback,
    ) -> PreloadResult<RunState> {
        let run = self.begin_run()?;
        info!(manifest = manifest_url, base_url = %self.config.base_url, "preload started");

        let raw = match self.fetch_manifest(manifest_url).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(manifest = manifest_url, error = %err, "manifest fetch failed");
                callback.error(manifest_url);
                return Ok(run.end(RunState::ManifestFailed));
            }
        };

        let entries = decode(&raw);
        let total = entries.len();
        self.progress.reset(total);
        self.set_state(RunState::Dispatching);

        if total == 0 {
            info!(manifest = manifest_url, "manifest is empty");
            callback.done();
            return Ok(run.end(RunState::Completed));
        }

        let mut tasks = JoinSet::new();
        let mut pending = BTreeSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if !entry.kind.is_fetched() {
                self.finish(entry, Ok(None), callback);
                continue;
            }
            let Some(loader) = self.registry.get(entry.kind) else {
                self.finish(entry, Err(LoadError::NoLoader(entry.kind)), callback);
                continue;
            };
            let location = self.config.resolve(&entry.url);
            pending.insert(index);
            tasks.spawn(async move { (index, loader.load(&location).await) });
        }
        debug!(total, in_flight = pending.len(), "entries dispatched");

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => {
                    pending.remove(&index);
                    self.finish(&entries[index], outcome.map(Some), callback);
                }
                Err(err) => warn!(error = %err, "load task did not complete"),
            }
        }

        // Tasks that panicked or were cancelled never reported their index.
        for index in pending {
            let err = LoadError::Aborted(entries[index].url.clone());
            self.finish(&entries[index], Err(err), callback);
        }

        Ok(run.end(RunState::Completed))
    }

    async fn fetch_manifest(&self, manifest_url: &str) -> LoadResult<String> {
        let fetch: Arc<dyn TextFetch> = self
            .registry
            .text_fetch()
            .ok_or(LoadError::NoLoader(apl_types::AssetKind::Text))?;
        fetch.fetch_text(&self.config.resolve(manifest_url)).await
    }

    /// The finish step for one entry. `Ok(None)` is a success with nothing to
    /// store (directories).
    fn finish(
        &self,
        entry: &ManifestEntry,
        outcome: LoadResult<Option<AssetPayload>>,
        callback: &dyn PreloadCallback,
    ) {
        let (count, total) = self.progress.advance();
        match outcome {
            Ok(payload) => {
                if let Some(payload) = payload {
                    self.store.insert(entry.url.clone(), payload);
                }
                debug!(url = %entry.url, kind = %entry.kind, count, total, "asset loaded");
                callback.loaded(&entry.url, count, total);
            }
            Err(err) => {
                warn!(url = %entry.url, kind = %entry.kind, error = %err, "asset failed to load");
                callback.error(&entry.url);
            }
        }
        if count == total {
            info!(total, stored = self.store.len(), "preload completed");
            callback.done();
        }
    }

    fn begin_run(&self) -> PreloadResult<ActiveRun<'_>> {
        let mut state = self.state.lock().expect("lock poisoned");
        if state.is_active() {
            return Err(PreloadError::RunInProgress);
        }
        *state = RunState::FetchingManifest;
        self.progress.reset(0);
        Ok(ActiveRun {
            state: &self.state,
            ended: false,
        })
    }

    fn set_state(&self, next: RunState) {
        *self.state.lock().expect("lock poisoned") = next;
    }
}

/// Marks a run as in flight for as long as it lives.
///
/// A run dropped before reaching a terminal state (its future cancelled, or a
/// callback panicking) puts the preloader back to `Idle`. Dropping the run
/// future also drops its `JoinSet`, which aborts the loads still in flight.
struct ActiveRun<'a> {
    state: &'a Mutex<RunState>,
    ended: bool,
}

impl ActiveRun<'_> {
    fn end(mut self, terminal: RunState) -> RunState {
        self.ended = true;
        *self.state.lock().expect("lock poisoned") = terminal;
        terminal
    }
}

impl Drop for ActiveRun<'_> {
    fn drop(&mut self) {
        if self.ended {
            return;
        }
        // May run while unwinding; never panic here.
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        warn!(state = %*state, "preload run abandoned before completion");
        *state = RunState::Idle;
    }
}

impl fmt::Debug for Preloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preloader")
            .field("config", &self.config)
            .field("state", &self.state())
            .field("loaded", &self.loaded())
            .field("total", &self.total())
            .field("store", &self.store)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// PreloaderBuilder
// ---------------------------------------------------------------------------

/// Builder for [`Preloader`].
#[derive(Debug, Default)]
pub struct PreloaderBuilder {
    config: PreloaderConfig,
    registry: LoaderRegistry,
}

impl PreloaderBuilder {
    pub fn config(mut self, config: PreloaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn registry(mut self, registry: LoaderRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn build(self) -> Preloader {
        Preloader::new(self.config, self.registry)
    }
}
