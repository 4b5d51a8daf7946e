//! Manifest codec for the asset preloader.
//!
//! A manifest is UTF-8 text with one `<code>:<url>` record per line, where the
//! code is `i` (image), `b` (binary), `a` (audio), `d` (directory) or anything
//! else for text. Decoding is deliberately lenient: malformed lines are
//! dropped and unknown codes become text.
//!
//! Besides [`decode`], this crate can write manifests back out ([`encode`])
//! and build one from an asset directory on disk ([`scan`]).

pub mod classify;
pub mod codec;
pub mod error;
pub mod scan;

pub use classify::classify;
pub use codec::{decode, decode_line, encode, SEPARATOR};
pub use error::{ManifestError, ManifestResult};
pub use scan::scan;
