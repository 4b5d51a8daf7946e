//! Typed loaders for the asset preloader.
//!
//! The preloader never fetches anything itself. It depends on four external
//! fetch capabilities ([`TextFetch`], [`ImageFetch`], [`BinaryFetch`],
//! [`AudioFetch`]) and sees them only through the uniform [`AssetLoader`]
//! interface. A [`LoaderRegistry`] maps each [`AssetKind`] to its loader, so
//! the coordinator dispatches without branching on the kind tag.
//!
//! # Backends
//!
//! - [`InMemoryFetcher`] -- url → bytes map for tests and embedding
//! - [`FsFetcher`] -- local filesystem, used by the `apl` CLI
//!
//! [`AssetKind`]: apl_types::AssetKind

pub mod adapters;
pub mod error;
pub mod fs;
pub mod memory;
pub mod registry;
pub mod traits;

pub use adapters::{AudioLoader, BinaryLoader, ImageLoader, TextLoader};
pub use error::{LoadError, LoadResult};
pub use fs::FsFetcher;
pub use memory::InMemoryFetcher;
pub use registry::LoaderRegistry;
pub use traits::{AssetLoader, AudioFetch, BinaryFetch, ImageFetch, TextFetch};
