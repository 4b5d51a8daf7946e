use std::io::Cursor;

use bytes::Bytes;

use apl_types::AssetStream;

use crate::store::AssetStore;

/// Length reported for image and audio assets.
///
/// This is a stand-in, not a real size: the store keeps no decoded size for
/// those kinds.
pub const PLACEHOLDER_LENGTH: u64 = 1;

const PLACEHOLDER_BYTES: &[u8] = &[0];

/// Read-only queries over loaded assets.
///
/// Any url may be queried at any time; urls whose load has not finished
/// successfully read as absent.
pub trait AssetLookup {
    /// `true` if `url` is stored under any kind.
    fn contains(&self, url: &str) -> bool;

    fn is_text(&self, url: &str) -> bool;
    fn is_image(&self, url: &str) -> bool;
    fn is_binary(&self, url: &str) -> bool;
    fn is_audio(&self, url: &str) -> bool;

    /// Byte length of the asset.
    ///
    /// Text reports its UTF-8 length and binary its blob length. Image and
    /// audio report [`PLACEHOLDER_LENGTH`]. Unknown urls report 0.
    fn length(&self, url: &str) -> u64;

    /// Open a byte stream over the asset.
    ///
    /// Text yields its UTF-8 bytes and binary the blob contents. Image and
    /// audio yield a single placeholder byte. Unknown urls yield `None`.
    fn read(&self, url: &str) -> Option<AssetStream>;

    /// Directory queries are not supported.
    ///
    /// # Panics
    ///
    /// Always.
    fn is_directory(&self, url: &str) -> bool {
        unimplemented!("is_directory({url})")
    }

    /// Directory listing is not supported.
    ///
    /// # Panics
    ///
    /// Always.
    fn list(&self, url: &str) -> Vec<String> {
        unimplemented!("list({url})")
    }
}

impl AssetLookup for AssetStore {
    fn contains(&self, url: &str) -> bool {
        let b = self.buckets.read().expect("lock poisoned");
        b.texts.contains_key(url)
            || b.images.contains_key(url)
            || b.binaries.contains_key(url)
            || b.audio.contains(url)
    }

    fn is_text(&self, url: &str) -> bool {
        self.buckets.read().expect("lock poisoned").texts.contains_key(url)
    }

    fn is_image(&self, url: &str) -> bool {
        self.buckets.read().expect("lock poisoned").images.contains_key(url)
    }

    fn is_binary(&self, url: &str) -> bool {
        self.buckets.read().expect("lock poisoned").binaries.contains_key(url)
    }

    fn is_audio(&self, url: &str) -> bool {
        self.buckets.read().expect("lock poisoned").audio.contains(url)
    }

    fn length(&self, url: &str) -> u64 {
        let b = self.buckets.read().expect("lock poisoned");
        if let Some(text) = b.texts.get(url) {
            return text.len() as u64;
        }
        if b.images.contains_key(url) {
            return PLACEHOLDER_LENGTH;
        }
        if let Some(blob) = b.binaries.get(url) {
            return blob.length();
        }
        if b.audio.contains(url) {
            return PLACEHOLDER_LENGTH;
        }
        0
    }

    fn read(&self, url: &str) -> Option<AssetStream> {
        let b = self.buckets.read().expect("lock poisoned");
        if let Some(text) = b.texts.get(url) {
            return Some(Cursor::new(Bytes::from(text.clone().into_bytes())));
        }
        if b.images.contains_key(url) {
            return Some(placeholder_stream());
        }
        if let Some(blob) = b.binaries.get(url) {
            return Some(blob.read());
        }
        if b.audio.contains(url) {
            return Some(placeholder_stream());
        }
        None
    }
}

fn placeholder_stream() -> AssetStream {
    Cursor::new(Bytes::from_static(PLACEHOLDER_BYTES))
}
