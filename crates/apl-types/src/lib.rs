//! Foundation types for the asset preloader.
//!
//! Every other `apl-*` crate depends on `apl-types`. Nothing in here performs
//! I/O; these are the values that flow between the manifest decoder, the
//! typed loaders, and the asset store.
//!
//! # Key Types
//!
//! - [`AssetKind`] -- Kind of resource named by a manifest line
//! - [`ManifestEntry`] -- One `(kind, url)` record decoded from a manifest
//! - [`AssetPayload`] -- Typed result of one successful load
//! - [`Blob`] -- Length-aware immutable byte buffer for binary assets
//! - [`ImageHandle`] -- Opaque handle to a fetched image resource

pub mod entry;
pub mod kind;
pub mod payload;

pub use entry::ManifestEntry;
pub use kind::AssetKind;
pub use payload::{AssetPayload, AssetStream, Blob, ImageHandle};
