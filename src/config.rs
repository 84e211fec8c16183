use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WirecutError};
use crate::matcher::FieldMatcher;

/// Raw field mapping configuration: field token → pattern string.
///
/// Holds uncompiled strings only; compilation (and the tolerance for
/// entries that are not valid regexes) lives in [`FieldMatcher`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Pattern per field token. Each pattern must match a whole metadata
    /// line and carry exactly one capture group for the value.
    pub fields: BTreeMap<String, String>,
}

impl Default for FieldConfig {
    /// Built-in mapping for the common English newswire export layout.
    fn default() -> Self {
        let fields = [
            ("publication", r"^\s*(?:PUBLICATION|Publication):\s*(.+?)\s*$"),
            ("byline", r"^\s*BYLINE:\s*(.+?)\s*$"),
            ("journalCode", r"^\s*JOURNAL-CODE:\s*([0-9]+)\s*$"),
            ("language", r"^\s*LANGUAGE:\s*(.+?)\s*$"),
            ("length", r"^\s*LENGTH:\s*([0-9]+)\s*(?:words)?\s*$"),
            ("loadDate", r"^\s*LOAD-DATE:\s*(.+?)\s*$"),
            (
                "documentDate",
                r"^\s*((?:January|February|March|April|May|June|July|August|September|October|November|December)\s+[0-9]{1,2},\s+[0-9]{4})(?:\s+\S+)?\s*$",
            ),
            ("publicationType", r"^\s*PUBLICATION-TYPE:\s*(.+?)\s*$"),
        ];
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl FieldConfig {
    /// Load a mapping from a TOML file. The file's `[fields]` table replaces
    /// the built-in mapping entirely, so a corpus-specific config is
    /// self-contained.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            WirecutError::Config(format!("{}: {e}", path.display()))
        })
    }

    /// Compile the mapping into a matcher. Unusable entries are skipped,
    /// never fatal.
    #[must_use]
    pub fn matcher(&self) -> FieldMatcher {
        FieldMatcher::from_patterns(self.fields.iter())
    }
}
