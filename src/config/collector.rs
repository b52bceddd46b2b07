//! Environment collection under a fixed prefix.

use std::collections::BTreeMap;

use super::overlay::Overlay;

/// Lowercased, dotted key paths collected from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPaths {
    entries: BTreeMap<String, String>,
}

impl KeyPaths {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Find the value for `section.field`.
    ///
    /// The dotted path is preferred; otherwise any collected key whose
    /// separators all read as `_` (e.g. `server_read_timeout`) matches.
    pub fn lookup(&self, section: &str, field: &str) -> Option<&str> {
        let dotted = format!("{section}.{field}");
        if let Some(value) = self.get(&dotted) {
            return Some(value);
        }
        let flat = format!("{section}_{field}");
        self.entries
            .iter()
            .find(|(key, _)| key.replace('.', "_") == flat)
            .map(|(_, value)| value.as_str())
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

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyPaths {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Scans environment variables for a case-sensitive prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvCollector {
    prefix: String,
    delimiter: String,
}

impl EnvCollector {
    pub fn new(prefix: impl Into<String>, delimiter: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            delimiter: delimiter.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Merge the environment snapshot with the overlay (overlay wins) and
    /// keep only prefixed keys, mapped to lowercase dotted paths.
    pub fn collect<I, K, V>(&self, environment: I, overlay: &Overlay) -> KeyPaths
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut merged: BTreeMap<String, String> = environment
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        for (key, value) in overlay.iter() {
            merged.insert(key.to_string(), value.to_string());
        }

        let paths: KeyPaths = merged
            .into_iter()
            .filter_map(|(key, value)| self.key_path(&key).map(|path| (path, value)))
            .collect();
        tracing::debug!(prefix = %self.prefix, keys = paths.len(), "Collected environment");
        paths
    }

    /// `PREFIX_SERVER.PORT` becomes `server.port`; unprefixed keys are dropped.
    pub fn key_path(&self, key: &str) -> Option<String> {
        let rest = key.strip_prefix(self.prefix.as_str())?;
        if rest.is_empty() {
            return None;
        }
        let lowered = rest.to_lowercase();
        if self.delimiter.is_empty() || self.delimiter == "." {
            return Some(lowered);
        }
        Some(lowered.replace(&self.delimiter.to_lowercase(), "."))
    }
}
