//! Preload coordinator for the asset preloader.
//!
//! A [`Preloader`] fetches a manifest, starts one load per entry through the
//! [`LoaderRegistry`](apl_loader::LoaderRegistry), and files every successful
//! load into its [`AssetStore`](apl_store::AssetStore). Progress is reported
//! through a [`PreloadCallback`]:
//!
//! - `loaded(url, count, total)` or `error(url)` once per entry, in
//!   completion order;
//! - `done()` exactly once, after every entry has finished.
//!
//! If the manifest itself cannot be fetched, the run reports
//! `error(manifest_url)` and ends without `done()`.

pub mod callback;
pub mod config;
pub mod error;
pub mod preloader;

pub use callback::{PreloadCallback, PreloadEvent};
pub use config::{base_url_from_module, PreloaderConfig, DEFAULT_MANIFEST};
pub use error::{PreloadError, PreloadResult};
pub use preloader::{Preloader, PreloaderBuilder, RunState};

// Re-export the pieces callers need to assemble and query a preloader.
pub use apl_loader::{FsFetcher, InMemoryFetcher, LoaderRegistry};
pub use apl_store::{AssetLookup, AssetStore};
pub use apl_types::{AssetKind, ManifestEntry};
