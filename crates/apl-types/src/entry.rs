use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::AssetKind;

/// One `(kind, url)` record decoded from a manifest.
///
/// The url is relative to the preloader's base url and is also the key the
/// asset is stored under once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub url: String,
    pub kind: AssetKind,
}

impl ManifestEntry {
    pub fn new(kind: AssetKind, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }
}

/// Formats the entry as its manifest line, `<code>:<url>`.
impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.code(), self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_manifest_line() {
        let entry = ManifestEntry::new(AssetKind::Image, "ui/logo.png");
        assert_eq!(entry.to_string(), "i:ui/logo.png");
        let entry = ManifestEntry::new(AssetKind::Text, "data/level.json");
        assert_eq!(entry.to_string(), "t:data/level.json");
    }
}
