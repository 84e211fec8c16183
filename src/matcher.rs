use regex::{Captures, Regex};

use crate::error::{Result, WirecutError};
use crate::models::FieldKind;

/// Classifies single lines of text against a configurable field mapping.
///
/// The mapping is compiled once and never mutated afterwards, so one matcher
/// can be shared read-only across concurrent parse calls.
pub struct FieldMatcher {
    patterns: Vec<(FieldKind, Regex)>,
}

impl FieldMatcher {
    /// Build a matcher from raw `(key, pattern)` configuration entries.
    ///
    /// Entries are tolerated, not validated: a key that is not a known field
    /// token, or a value that does not compile as a regex, is skipped so that
    /// non-regex configuration noise can coexist with real patterns. Each
    /// surviving pattern is expected to carry exactly one capture group.
    pub fn from_patterns<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for (key, raw) in entries {
            let Some(kind) = FieldKind::parse(key.as_ref()) else {
                tracing::debug!(key = key.as_ref(), "skipping unknown field key");
                continue;
            };
            match Regex::new(raw.as_ref()) {
                Ok(re) => patterns.push((kind, re)),
                Err(e) => {
                    tracing::debug!(key = key.as_ref(), error = %e, "skipping invalid pattern");
                }
            }
        }
        Self { patterns }
    }

    /// Classify a line: the first field whose pattern matches the entire
    /// line, or `None` if the line is not metadata. Patterns are assumed
    /// mutually exclusive in well-formed configurations, so iteration order
    /// does not matter.
    #[must_use]
    pub fn classify(&self, line: &str) -> Option<FieldKind> {
        self.patterns
            .iter()
            .find(|(_, re)| full_match(re, line).is_some())
            .map(|(kind, _)| *kind)
    }

    /// Extract the trimmed first capture group of `kind`'s pattern from a
    /// line already classified as that field. Re-checks the match
    /// defensively and fails if the line does not actually match.
    pub fn extract(&self, line: &str, kind: FieldKind) -> Result<String> {
        let caps = self
            .patterns
            .iter()
            .filter(|(k, _)| *k == kind)
            .find_map(|(_, re)| full_match(re, line))
            .ok_or_else(|| WirecutError::FieldMismatch {
                field: kind.as_str().to_string(),
            })?;
        let group = caps
            .get(1)
            .ok_or_else(|| WirecutError::FieldMismatch {
                field: kind.as_str().to_string(),
            })?;
        Ok(group.as_str().trim().to_string())
    }

    /// Number of usable mapping entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over the compiled mapping as `(field, pattern source)`.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, &str)> {
        self.patterns.iter().map(|(kind, re)| (*kind, re.as_str()))
    }
}

/// Match a line against a pattern requiring the match to span the whole
/// line, not just a substring.
fn full_match<'t>(re: &Regex, line: &'t str) -> Option<Captures<'t>> {
    let caps = re.captures(line)?;
    let whole = caps.get(0)?;
    if whole.start() == 0 && whole.end() == line.len() {
        Some(caps)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> FieldMatcher {
        FieldMatcher::from_patterns([
            ("publication", r"^Publication:\s*(.+)$"),
            ("length", r"^LENGTH:\s*(\d+)\s*words$"),
            ("byline", r"^BYLINE:\s*(.+)$"),
        ])
    }

    #[test]
    fn classify_matching_lines() {
        let m = matcher();
        assert_eq!(
            m.classify("Publication: Acme Times"),
            Some(FieldKind::Publication)
        );
        assert_eq!(m.classify("LENGTH: 1876 words"), Some(FieldKind::Length));
        assert_eq!(m.classify("BYLINE: Jane Doe"), Some(FieldKind::Byline));
    }

    #[test]
    fn classify_requires_full_line_match() {
        let m = matcher();
        // Substring matches do not count.
        assert_eq!(m.classify("see LENGTH: 1876 words below"), None);
        assert_eq!(m.classify("LENGTH: 1876 words and counting"), None);
    }

    #[test]
    fn classify_non_metadata_is_none() {
        let m = matcher();
        assert_eq!(m.classify("Just an ordinary body line."), None);
        assert_eq!(m.classify(""), None);
    }

    #[test]
    fn extract_trims_capture() {
        let m = FieldMatcher::from_patterns([("publication", r"^Publication:(.*)$")]);
        let value = m
            .extract("Publication:   Acme Times  ", FieldKind::Publication)
            .unwrap();
        assert_eq!(value, "Acme Times");
    }

    #[test]
    fn extract_rejects_non_matching_line() {
        let m = matcher();
        let err = m.extract("nothing here", FieldKind::Length).unwrap_err();
        assert!(matches!(err, WirecutError::FieldMismatch { .. }));
    }

    #[test]
    fn invalid_patterns_are_skipped() {
        let m = FieldMatcher::from_patterns([
            ("publication", r"^Publication:\s*(.+)$"),
            ("byline", r"^BYLINE:\s*(.+)$"),
            ("length", r"([unclosed"),
            ("language", r"^LANGUAGE:\s*(.+)$"),
            ("loadDate", r"^LOAD-DATE:\s*(.+)$"),
        ]);
        assert_eq!(m.len(), 4);
        assert_eq!(m.classify("LENGTH: 10 words"), None);
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let m = FieldMatcher::from_patterns([
            ("publication", r"^Publication:\s*(.+)$"),
            ("outputDirectory", "/var/data/exports"),
        ]);
        assert_eq!(m.len(), 1);
    }
}
