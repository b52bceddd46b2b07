//! Override files (`.env` style) loaded into an explicit overlay map.
//!
//! Files are read in order and a later file wins for a repeated key. A file
//! that cannot be read is skipped; this stage never fails.

use std::collections::BTreeMap;
use std::path::Path;

/// Key/value pairs collected from override files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    entries: BTreeMap<String, String>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every readable file in `paths`, in order.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut overlay = Self::new();
        for path in paths {
            let path = path.as_ref();
            match std::fs::read(path) {
                Ok(bytes) => {
                    // Invalid UTF-8 only spoils the lines it appears on.
                    let content = String::from_utf8_lossy(&bytes);
                    let before = overlay.len();
                    overlay.merge_str(&content);
                    tracing::debug!(
                        path = %path.display(),
                        new_keys = overlay.len() - before,
                        "Loaded override file"
                    );
                }
                Err(error) => {
                    tracing::debug!(path = %path.display(), %error, "Skipping override file");
                }
            }
        }
        overlay
    }

    /// Parse `content` and merge its assignments, overwriting existing keys.
    pub fn merge_str(&mut self, content: &str) {
        for (key, value) in content.lines().filter_map(parse_line) {
            self.entries.insert(key, value);
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse one `KEY=VALUE` line.
///
/// Blank lines, `#` comments, lines without `=` and lines with an empty key
/// yield `None`. The value may contain further `=` characters.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), unquote(value.trim()).to_string()))
}

/// Strip exactly one matching pair of surrounding `"` or `'`.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
