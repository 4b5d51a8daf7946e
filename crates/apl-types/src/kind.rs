use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of resource named by a manifest line.
///
/// The one-letter manifest code is lenient on the way in: any code that is
/// not one of `i`, `b`, `a`, `d` is read as [`AssetKind::Text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Text,
    Image,
    Binary,
    Audio,
    Directory,
}

impl AssetKind {
    /// All kinds, in manifest-code order.
    pub const ALL: [AssetKind; 5] = [
        AssetKind::Text,
        AssetKind::Image,
        AssetKind::Binary,
        AssetKind::Audio,
        AssetKind::Directory,
    ];

    /// Map a manifest code to a kind. Unknown codes fall back to `Text`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "i" => Self::Image,
            "b" => Self::Binary,
            "a" => Self::Audio,
            "d" => Self::Directory,
            _ => Self::Text,
        }
    }

    /// The canonical manifest code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Text => "t",
            Self::Image => "i",
            Self::Binary => "b",
            Self::Audio => "a",
            Self::Directory => "d",
        }
    }

    /// Returns `true` if loading this kind goes through a fetch capability.
    ///
    /// Directories are never fetched; they finish as soon as they are
    /// dispatched.
    pub fn is_fetched(&self) -> bool {
        !matches!(self, Self::Directory)
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Binary => "binary",
            Self::Audio => "audio",
            Self::Directory => "directory",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(AssetKind::from_code("i"), AssetKind::Image);
        assert_eq!(AssetKind::from_code("b"), AssetKind::Binary);
        assert_eq!(AssetKind::from_code("a"), AssetKind::Audio);
        assert_eq!(AssetKind::from_code("d"), AssetKind::Directory);
        assert_eq!(AssetKind::from_code("t"), AssetKind::Text);
    }

    #[test]
    fn unknown_codes_default_to_text() {
        for code in ["", "x", "I", "image", " i", "tt"] {
            assert_eq!(AssetKind::from_code(code), AssetKind::Text, "code {code:?}");
        }
    }

    #[test]
    fn code_is_inverse_of_from_code() {
        for kind in AssetKind::ALL {
            assert_eq!(AssetKind::from_code(kind.code()), kind);
        }
    }

    #[test]
    fn only_directories_skip_fetching() {
        assert!(!AssetKind::Directory.is_fetched());
        assert!(AssetKind::Text.is_fetched());
        assert!(AssetKind::Audio.is_fetched());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&AssetKind::Binary).unwrap();
        assert_eq!(json, "\"binary\"");
        let back: AssetKind = serde_json::from_str("\"directory\"").unwrap();
        assert_eq!(back, AssetKind::Directory);
    }
}
