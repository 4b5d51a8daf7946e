use std::path::Path;

use apl_types::AssetKind;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "ogg", "wav"];
const TEXT_EXTENSIONS: &[&str] = &[
    "json", "xml", "txt", "glsl", "fnt", "pack", "obj", "atlas", "g3dj",
];

/// Decide the asset kind of a file from its extension.
///
/// Files without a recognised extension are shipped as binary.
pub fn classify(path: &Path) -> AssetKind {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return AssetKind::Binary,
    };
    let ext = ext.as_str();

    if IMAGE_EXTENSIONS.contains(&ext) {
        AssetKind::Image
    } else if AUDIO_EXTENSIONS.contains(&ext) {
        AssetKind::Audio
    } else if TEXT_EXTENSIONS.contains(&ext) {
        AssetKind::Text
    } else {
        AssetKind::Binary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images() {
        assert_eq!(classify(Path::new("ui/logo.png")), AssetKind::Image);
        assert_eq!(classify(Path::new("photo.JPEG")), AssetKind::Image);
    }

    #[test]
    fn audio() {
        assert_eq!(classify(Path::new("sfx/jump.ogg")), AssetKind::Audio);
        assert_eq!(classify(Path::new("music.Mp3")), AssetKind::Audio);
    }

    #[test]
    fn text() {
        assert_eq!(classify(Path::new("shaders/default.glsl")), AssetKind::Text);
        assert_eq!(classify(Path::new("skin.atlas")), AssetKind::Text);
    }

    #[test]
    fn everything_else_is_binary() {
        assert_eq!(classify(Path::new("level.dat")), AssetKind::Binary);
        assert_eq!(classify(Path::new("README")), AssetKind::Binary);
        assert_eq!(classify(Path::new(".hidden")), AssetKind::Binary);
    }
}
