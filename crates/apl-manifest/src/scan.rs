use std::path::Path;

use tracing::info;
use walkdir::WalkDir;

use apl_types::{AssetKind, ManifestEntry};

use crate::classify::classify;
use crate::error::{ManifestError, ManifestResult};

/// Build a manifest from an asset directory.
///
/// Walks `root` recursively in file-name order. Every sub-directory becomes a
/// [`AssetKind::Directory`] entry and every file a classified entry. Urls are
/// relative to `root` and always use `/` as the separator. The root itself is
/// not listed.
pub fn scan(root: &Path) -> ManifestResult<Vec<ManifestEntry>> {
    if !root.is_dir() {
        return Err(ManifestError::NotADirectory(root.to_path_buf()));
    }

    let mut entries = Vec::new();
    for dent in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let dent = dent?;
        let rel = dent
            .path()
            .strip_prefix(root)
            .map_err(|_| ManifestError::InvalidPath(dent.path().to_path_buf()))?;

        let mut parts = Vec::new();
        for component in rel.components() {
            let part = component
                .as_os_str()
                .to_str()
                .ok_or_else(|| ManifestError::InvalidPath(dent.path().to_path_buf()))?;
            parts.push(part);
        }
        let url = parts.join("/");

        let kind = if dent.file_type().is_dir() {
            AssetKind::Directory
        } else {
            classify(dent.path())
        };
        entries.push(ManifestEntry::new(kind, url));
    }

    info!(root = %root.display(), entries = entries.len(), "asset directory scanned");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn asset_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("sfx")).unwrap();
        fs::create_dir_all(root.join("ui")).unwrap();
        fs::write(root.join("level.dat"), [0u8, 1, 2]).unwrap();
        fs::write(root.join("config.json"), "{}").unwrap();
        fs::write(root.join("sfx/jump.wav"), [0u8; 8]).unwrap();
        fs::write(root.join("ui/logo.png"), [0u8; 8]).unwrap();
        dir
    }

    #[test]
    fn scan_lists_directories_and_classified_files() {
        let dir = asset_tree();
        let entries = scan(dir.path()).unwrap();

        assert_eq!(
            entries,
            vec![
                ManifestEntry::new(AssetKind::Text, "config.json"),
                ManifestEntry::new(AssetKind::Binary, "level.dat"),
                ManifestEntry::new(AssetKind::Directory, "sfx"),
                ManifestEntry::new(AssetKind::Audio, "sfx/jump.wav"),
                ManifestEntry::new(AssetKind::Directory, "ui"),
                ManifestEntry::new(AssetKind::Image, "ui/logo.png"),
            ]
        );
    }

    #[test]
    fn scan_output_decodes_back() {
        let dir = asset_tree();
        let entries = scan(dir.path()).unwrap();
        let text = crate::encode(&entries);
        assert_eq!(crate::decode(&text), entries);
    }

    #[test]
    fn scan_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn scan_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir.txt");
        fs::write(&file, "x").unwrap();
        let err = scan(&file).unwrap_err();
        assert!(matches!(err, ManifestError::NotADirectory(_)));
    }
}
