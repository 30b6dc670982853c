//! Canonical object path inside a bucket

use std::fmt;

use serde::Serialize;

/// Path separator used by object keys
pub const SEPARATOR: char = '/';

/// Folder and key joined into a single object path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ObjectPath(String);

impl ObjectPath {
    /// Joins an optional folder with a key
    ///
    /// Each segment is trimmed and loses one leading and one trailing
    /// separator. An empty folder yields the key alone.
    #[must_use]
    pub fn new(folder: &str, key: &str) -> Self {
        let folder = clean_segment(folder);
        let key = clean_segment(key);

        if folder.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{folder}{SEPARATOR}{key}"))
        }
    }

    /// The joined path
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trims whitespace and strips one separator from each end
pub(crate) fn clean_segment(segment: &str) -> &str {
    let segment = segment.trim();
    let segment = segment.strip_prefix(SEPARATOR).unwrap_or(segment);
    segment.strip_suffix(SEPARATOR).unwrap_or(segment)
}
