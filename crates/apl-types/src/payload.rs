use std::fmt;
use std::io::Cursor;

use bytes::Bytes;

use crate::kind::AssetKind;

/// Readable byte stream handed out by lookups.
pub type AssetStream = Cursor<Bytes>;

// ---------------------------------------------------------------------------
// Blob
// ---------------------------------------------------------------------------

/// Length-aware immutable byte buffer holding a binary asset.
///
/// Cloning a `Blob` is cheap; the underlying buffer is reference counted.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Blob {
    data: Bytes,
}

impl Blob {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Declared length of the blob in bytes.
    pub fn length(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Open a fresh stream positioned at the start of the blob.
    pub fn read(&self) -> AssetStream {
        Cursor::new(self.data.clone())
    }

    pub fn as_bytes(&self) -> &Bytes {
        &self.data
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob").field("length", &self.length()).finish()
    }
}

impl From<Vec<u8>> for Blob {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

// ---------------------------------------------------------------------------
// ImageHandle
// ---------------------------------------------------------------------------

/// Opaque handle to a fetched image.
///
/// The preloader never decodes images. The handle keeps the location it was
/// fetched from and the encoded bytes so a renderer can pick it up later.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageHandle {
    source: String,
    encoded: Bytes,
}

impl ImageHandle {
    pub fn new(source: impl Into<String>, encoded: impl Into<Bytes>) -> Self {
        Self {
            source: source.into(),
            encoded: encoded.into(),
        }
    }

    /// Location the image was fetched from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Encoded image data as fetched.
    pub fn encoded(&self) -> &Bytes {
        &self.encoded
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("source", &self.source)
            .field("encoded_len", &self.encoded.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// AssetPayload
// ---------------------------------------------------------------------------

/// Typed result of one successful load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetPayload {
    Text(String),
    Image(ImageHandle),
    Binary(Blob),
    /// Audio records presence only.
    Audio,
}

impl AssetPayload {
    /// The asset kind this payload belongs to.
    pub fn kind(&self) -> AssetKind {
        match self {
            Self::Text(_) => AssetKind::Text,
            Self::Image(_) => AssetKind::Image,
            Self::Binary(_) => AssetKind::Binary,
            Self::Audio => AssetKind::Audio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn blob_length_and_stream() {
        let blob = Blob::new(vec![1u8, 2, 3, 4]);
        assert_eq!(blob.length(), 4);

        let mut out = Vec::new();
        blob.read().read_to_end(&mut out).unwrap();
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn blob_streams_are_independent() {
        let blob = Blob::new(b"abc".to_vec());
        let mut first = blob.read();
        let mut buf = [0u8; 2];
        first.read_exact(&mut buf).unwrap();

        let mut out = Vec::new();
        blob.read().read_to_end(&mut out).unwrap();
        assert_eq!(out, b"abc");
    }

    #[test]
    fn empty_blob() {
        let blob = Blob::default();
        assert!(blob.is_empty());
        assert_eq!(blob.length(), 0);
    }

    #[test]
    fn payload_kinds() {
        assert_eq!(AssetPayload::Text("x".into()).kind(), AssetKind::Text);
        assert_eq!(
            AssetPayload::Image(ImageHandle::new("a.png", vec![0u8])).kind(),
            AssetKind::Image
        );
        assert_eq!(AssetPayload::Binary(Blob::default()).kind(), AssetKind::Binary);
        assert_eq!(AssetPayload::Audio.kind(), AssetKind::Audio);
    }

    #[test]
    fn debug_does_not_dump_bytes() {
        let handle = ImageHandle::new("big.png", vec![7u8; 4096]);
        let dbg = format!("{handle:?}");
        assert!(dbg.contains("encoded_len: 4096"));
        assert!(!dbg.contains("7, 7"));
    }
}
