use serde::Serialize;

/// A metadata field that can be extracted from a document header or trailer.
///
/// Each variant names one attribute of a [`Document`](crate::models::Document)
/// and is paired with a configurable regex in the field mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    Publication,
    Byline,
    JournalCode,
    Language,
    Length,
    LoadDate,
    DocumentDate,
    PublicationType,
}

/// All known field kinds, in no particular order.
pub const ALL_FIELDS: [FieldKind; 8] = [
    FieldKind::Publication,
    FieldKind::Byline,
    FieldKind::JournalCode,
    FieldKind::Language,
    FieldKind::Length,
    FieldKind::LoadDate,
    FieldKind::DocumentDate,
    FieldKind::PublicationType,
];

impl FieldKind {
    /// The configuration key for this field.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Publication => "publication",
            Self::Byline => "byline",
            Self::JournalCode => "journalCode",
            Self::Language => "language",
            Self::Length => "length",
            Self::LoadDate => "loadDate",
            Self::DocumentDate => "documentDate",
            Self::PublicationType => "publicationType",
        }
    }

    /// Parse a configuration key. Unknown keys yield `None` so callers can
    /// skip non-field entries in a mapping.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "publication" => Some(Self::Publication),
            "byline" => Some(Self::Byline),
            "journalCode" => Some(Self::JournalCode),
            "language" => Some(Self::Language),
            "length" => Some(Self::Length),
            "loadDate" => Some(Self::LoadDate),
            "documentDate" => Some(Self::DocumentDate),
            "publicationType" => Some(Self::PublicationType),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_keys() {
        for kind in ALL_FIELDS {
            assert_eq!(FieldKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(FieldKind::parse("copyright"), None);
        assert_eq!(FieldKind::parse(""), None);
        assert_eq!(FieldKind::parse("Publication"), None);
    }
}
