use tracing::debug;

use apl_types::{AssetKind, ManifestEntry};

/// Separator between the kind code and the url on a manifest line.
pub const SEPARATOR: char = ':';

/// Decode a newline-delimited manifest into its entries, in line order.
///
/// Each line is split on every `:`. Trailing empty tokens are discarded, and a
/// line that does not leave exactly two tokens is skipped without error. The
/// first token is the kind code (see [`AssetKind::from_code`]); the second is
/// the url, trimmed of surrounding whitespace.
pub fn decode(raw: &str) -> Vec<ManifestEntry> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for line in raw.split('\n') {
        match decode_line(line) {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }

    debug!(entries = entries.len(), skipped, "manifest decoded");
    entries
}

/// Decode a single manifest line. Returns `None` for malformed lines.
pub fn decode_line(line: &str) -> Option<ManifestEntry> {
    let mut tokens: Vec<&str> = line.split(SEPARATOR).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    match tokens.as_slice() {
        [code, url] => Some(ManifestEntry::new(AssetKind::from_code(code), url.trim())),
        _ => None,
    }
}

/// Encode entries as manifest lines joined by `\n`.
pub fn encode(entries: &[ManifestEntry]) -> String {
    entries
        .iter()
        .map(ManifestEntry::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
