use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::models::field::FieldKind;

/// Date layout used by newswire exports for document and load dates,
/// e.g. "April 1, 2015".
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// A field value that matched structurally but failed semantic conversion.
///
/// These are recovered at the call site: the single assignment is skipped
/// and parsing continues.
#[derive(Error, Debug)]
pub enum AssignError {
    #[error("`{0}` is not an integer")]
    BadInteger(String),

    #[error("`{0}` is not a month-day-year date")]
    BadDate(String),
}

/// One document record cut out of a batch export.
///
/// Header fields are populated monotonically while the segmenter walks the
/// document's lines: a field is set at most once and never overwritten.
/// `text` and `copyright` are frozen from the accumulating buffers when the
/// document is finalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    #[serde(serialize_with = "empty_if_none")]
    pub headline: Option<String>,
    pub text: String,
    #[serde(rename = "documentDate", skip_serializing_if = "Option::is_none")]
    pub document_date: Option<NaiveDate>,
    #[serde(rename = "loadDate", skip_serializing_if = "Option::is_none")]
    pub load_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "publicationType", skip_serializing_if = "Option::is_none")]
    pub publication_type: Option<String>,
    #[serde(rename = "journalCode", serialize_with = "zero_if_none")]
    pub journal_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byline: Option<String>,
    pub copyright: String,
    #[serde(serialize_with = "zero_if_none")]
    pub length: Option<u32>,
}

fn empty_if_none<S: Serializer>(v: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(v.as_deref().unwrap_or(""))
}

fn zero_if_none<S: Serializer>(v: &Option<u32>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u32(v.unwrap_or(0))
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the headline once; later candidates are ignored.
    pub fn set_headline(&mut self, headline: &str) {
        if self.headline.is_none() {
            self.headline = Some(headline.trim().to_string());
        }
    }

    /// Assign an extracted metadata value to the field it belongs to,
    /// converting to the field's type.
    ///
    /// A conversion failure leaves the field untouched and is reported so
    /// the caller can log and move on. Fields already set are left as-is;
    /// population is strictly monotonic.
    pub fn assign(&mut self, kind: FieldKind, raw: &str) -> Result<(), AssignError> {
        match kind {
            FieldKind::Publication => set_text(&mut self.publication, raw),
            FieldKind::Byline => set_text(&mut self.byline, raw),
            FieldKind::Language => set_text(&mut self.language, raw),
            FieldKind::PublicationType => set_text(&mut self.publication_type, raw),
            FieldKind::JournalCode => set_integer(&mut self.journal_code, raw)?,
            FieldKind::Length => set_integer(&mut self.length, raw)?,
            FieldKind::LoadDate => set_date(&mut self.load_date, raw)?,
            FieldKind::DocumentDate => set_date(&mut self.document_date, raw)?,
        }
        Ok(())
    }
}

fn set_text(slot: &mut Option<String>, raw: &str) {
    if slot.is_none() {
        *slot = Some(raw.to_string());
    }
}

fn set_integer(slot: &mut Option<u32>, raw: &str) -> Result<(), AssignError> {
    let value = raw
        .parse::<u32>()
        .map_err(|_| AssignError::BadInteger(raw.to_string()))?;
    if slot.is_none() {
        *slot = Some(value);
    }
    Ok(())
}

fn set_date(slot: &mut Option<NaiveDate>, raw: &str) -> Result<(), AssignError> {
    let value = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| AssignError::BadDate(raw.to_string()))?;
    if slot.is_none() {
        *slot = Some(value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_text_fields() {
        let mut doc = Document::new();
        doc.assign(FieldKind::Publication, "Acme Times").unwrap();
        doc.assign(FieldKind::Byline, "Jane Doe").unwrap();
        doc.assign(FieldKind::Language, "ENGLISH").unwrap();
        doc.assign(FieldKind::PublicationType, "Newspaper").unwrap();
        assert_eq!(doc.publication.as_deref(), Some("Acme Times"));
        assert_eq!(doc.byline.as_deref(), Some("Jane Doe"));
        assert_eq!(doc.language.as_deref(), Some("ENGLISH"));
        assert_eq!(doc.publication_type.as_deref(), Some("Newspaper"));
    }

    #[test]
    fn assign_converts_integers() {
        let mut doc = Document::new();
        doc.assign(FieldKind::Length, "1876").unwrap();
        doc.assign(FieldKind::JournalCode, "1492").unwrap();
        assert_eq!(doc.length, Some(1876));
        assert_eq!(doc.journal_code, Some(1492));
    }

    #[test]
    fn assign_converts_dates() {
        let mut doc = Document::new();
        doc.assign(FieldKind::DocumentDate, "April 1, 2015").unwrap();
        doc.assign(FieldKind::LoadDate, "December 22, 2014").unwrap();
        assert_eq!(
            doc.document_date,
            Some(NaiveDate::from_ymd_opt(2015, 4, 1).unwrap())
        );
        assert_eq!(
            doc.load_date,
            Some(NaiveDate::from_ymd_opt(2014, 12, 22).unwrap())
        );
    }

    #[test]
    fn bad_integer_leaves_field_unset() {
        let mut doc = Document::new();
        assert!(doc.assign(FieldKind::Length, "N/A").is_err());
        assert_eq!(doc.length, None);
    }

    #[test]
    fn bad_date_leaves_field_unset() {
        let mut doc = Document::new();
        assert!(doc.assign(FieldKind::LoadDate, "Yestermonth 99").is_err());
        assert_eq!(doc.load_date, None);
    }

    #[test]
    fn fields_are_never_overwritten() {
        let mut doc = Document::new();
        doc.assign(FieldKind::Publication, "First").unwrap();
        doc.assign(FieldKind::Publication, "Second").unwrap();
        assert_eq!(doc.publication.as_deref(), Some("First"));

        doc.assign(FieldKind::Length, "100").unwrap();
        doc.assign(FieldKind::Length, "200").unwrap();
        assert_eq!(doc.length, Some(100));

        doc.set_headline("Original");
        doc.set_headline("Replacement");
        assert_eq!(doc.headline.as_deref(), Some("Original"));
    }

    #[test]
    fn serializes_to_external_shape() {
        let mut doc = Document::new();
        doc.set_headline("Headline Text Here");
        doc.assign(FieldKind::Publication, "Acme Times").unwrap();
        doc.assign(FieldKind::DocumentDate, "April 1, 2015").unwrap();
        doc.text = "Body.".into();
        doc.copyright = "Copyright 2015 Acme Corp.".into();

        let json: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["headline"], "Headline Text Here");
        assert_eq!(json["publication"], "Acme Times");
        assert_eq!(json["documentDate"], "2015-04-01");
        assert_eq!(json["journalCode"], 0);
        assert_eq!(json["length"], 0);
        assert_eq!(json["text"], "Body.");
        assert_eq!(json["copyright"], "Copyright 2015 Acme Corp.");
        // Absent optional strings are omitted entirely.
        assert!(json.get("byline").is_none());
        assert!(json.get("loadDate").is_none());
    }

    #[test]
    fn empty_document_serializes_defaults() {
        let doc = Document::new();
        let json: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["headline"], "");
        assert_eq!(json["text"], "");
        assert_eq!(json["copyright"], "");
        assert_eq!(json["journalCode"], 0);
        assert_eq!(json["length"], 0);
    }
}
