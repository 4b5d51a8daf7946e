//! Asset store for the asset preloader.
//!
//! Loaded assets live in four independent mappings keyed by url, one per
//! fetched kind: text, image, binary and audio (presence only). The preload
//! coordinator inserts into the store on load success; everything else reads
//! through the [`AssetLookup`] facade.
//!
//! # Design Rules
//!
//! 1. A failed load never inserts anything.
//! 2. Inside one mapping the last writer wins. Cross-kind duplicates are not
//!    validated.
//! 3. Lookups are safe at any time, including while a run is in flight;
//!    unfinished entries simply read as absent.

pub mod lookup;
pub mod store;

pub use lookup::{AssetLookup, PLACEHOLDER_LENGTH};
pub use store::AssetStore;
