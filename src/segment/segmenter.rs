use std::path::Path;

use regex::Regex;

use crate::error::Result;
use crate::matcher::FieldMatcher;
use crate::models::{Document, FieldKind};
use crate::segment::state::{Region, SegmentState};

/// Boundary marker between concatenated documents, e.g. "   Document 3 of 10"
/// or the German "   Dokument 3 von 10". Leading whitespace is part of the
/// marker layout.
const DOC_START_PATTERN: &str = r"^\s+(?:Dokument|Document) [0-9]+ (?:von|of) [0-9]+$";

/// Copyright block marker. The deep indentation is what distinguishes the
/// notice from a metadata field that happens to mention "Copyright".
const COPYRIGHT_MARKER: &str = "            Copyright";

/// Cuts a flat batch export into [`Document`] records, one line at a time.
///
/// Holds only the compiled field mapping and the boundary pattern; all
/// per-document state lives in a [`SegmentState`] local to each parse call,
/// so a single segmenter can serve concurrent calls.
pub struct Segmenter {
    matcher: FieldMatcher,
    doc_start: Regex,
}

impl Segmenter {
    #[must_use]
    pub fn new(matcher: FieldMatcher) -> Self {
        let doc_start = Regex::new(DOC_START_PATTERN).expect("boundary pattern is valid");
        Self { matcher, doc_start }
    }

    #[must_use]
    pub fn matcher(&self) -> &FieldMatcher {
        &self.matcher
    }

    /// Segment an ordered sequence of lines into document records,
    /// preserving source order. One sequential pass, never fails: malformed
    /// input degrades to partial records instead.
    pub fn parse_lines<I, S>(&self, lines: I) -> Vec<Document>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        let mut state = SegmentState::new();

        for line in lines {
            self.process_line(line.as_ref(), &mut state, &mut out);
        }

        // The trailing document has no closing marker; finalize it as-is.
        if let Some(doc) = state.finish() {
            out.push(doc);
        }

        out
    }

    /// Segment a full export already read into memory.
    #[must_use]
    pub fn parse_str(&self, source: &str) -> Vec<Document> {
        self.parse_lines(source.lines())
    }

    /// Read a file and segment it. An I/O failure yields the error and no
    /// partial result.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Document>> {
        let source = std::fs::read_to_string(path)?;
        Ok(self.parse_str(&source))
    }

    /// Apply the transition table to one line. Checks run in precedence
    /// order: blank-outside-body, boundary marker, copyright block,
    /// metadata, then region-dependent content handling.
    fn process_line(&self, line: &str, state: &mut SegmentState, out: &mut Vec<Document>) {
        if line.is_empty() && state.region != Region::Body {
            // Blank lines outside the body carry no content, but their count
            // is the signal that the body is about to start.
            state.empty_header_lines += 1;
            return;
        }

        if self.doc_start.is_match(line) {
            if let Some(done) = state.begin_document() {
                out.push(done);
            }
            return;
        }

        if !state.in_progress() {
            // Content before the first marker belongs to no document.
            return;
        }

        if state.region == Region::Copyright || line.contains(COPYRIGHT_MARKER) {
            state.push_copyright_line(line);
            state.region = Region::Copyright;
            return;
        }

        if let Some(kind) = self.matcher.classify(line) {
            self.assign_field(line, kind, state);
            state.empty_header_lines = 0;
            if state.region == Region::Body {
                // A metadata line after body text ends the body.
                state.region = Region::AfterBody;
            }
            return;
        }

        match state.region {
            Region::Body => {
                if line.is_empty() {
                    state.push_paragraph_break();
                } else {
                    state.push_body_line(line);
                }
            }
            Region::Header => {
                // First plain header line is the headline.
                if let Some(doc) = state.document_mut() {
                    doc.set_headline(line);
                }
                state.region = Region::AfterHeadline;
                state.empty_header_lines = 0;
            }
            Region::AfterHeadline if state.empty_header_lines >= 2 => {
                state.region = Region::Body;
                state.push_body_line(line);
            }
            // Header filler, or stray text after the body finished.
            Region::AfterHeadline | Region::AfterBody | Region::Idle | Region::Copyright => {}
        }
    }

    /// Extract and assign a classified metadata line. Both the defensive
    /// re-check and value conversion failures are skip-and-continue: the
    /// single assignment is abandoned, the parse goes on.
    fn assign_field(&self, line: &str, kind: FieldKind, state: &mut SegmentState) {
        let value = match self.matcher.extract(line, kind) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(field = %kind, error = %e, "classified line failed extraction");
                return;
            }
        };
        if let Some(doc) = state.document_mut() {
            if let Err(e) = doc.assign(kind, &value) {
                tracing::warn!(field = %kind, error = %e, "skipping unconvertible field value");
            }
        }
    }
}
