use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PreloadError, PreloadResult};

/// Manifest name used when none is configured.
pub const DEFAULT_MANIFEST: &str = "assets.txt";

/// Configuration for a [`Preloader`](crate::Preloader).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloaderConfig {
    /// Prefix joined to the manifest url and to every entry url before
    /// fetching. Store keys and callback urls never carry it.
    pub base_url: String,
    /// Manifest url, relative to `base_url`.
    pub manifest: String,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            manifest: DEFAULT_MANIFEST.to_string(),
        }
    }
}

impl PreloaderConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> PreloadResult<Self> {
        toml::from_str(s).map_err(|e| PreloadError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> PreloadResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// The location to fetch for a manifest or entry url.
    pub fn resolve(&self, url: &str) -> String {
        format!("{}{}", self.base_url, url)
    }
}

/// Derive the asset base url from a hosting module's base url.
///
/// The module's own path segment (`"<module_name>/"`) is removed and
/// `assets/` appended, so assets sit next to the module rather than inside it.
pub fn base_url_from_module(module_base_url: &str, module_name: &str) -> String {
    let stripped = module_base_url.replace(&format!("{module_name}/"), "");
    format!("{stripped}assets/")
}
