use crate::models::Document;

/// Where the segmenter currently is within a document's line sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// No document under construction (before the first start marker).
    Idle,
    /// Inside the header, headline not yet captured.
    Header,
    /// Headline captured, still reading header metadata.
    AfterHeadline,
    /// Inside the body text.
    Body,
    /// Body ended by a trailing metadata line.
    AfterBody,
    /// Inside the copyright block.
    Copyright,
}

/// Transient per-parse state: the document under construction, its
/// accumulating buffers, and the region/counter driving transitions.
///
/// Reset wholesale at every document boundary; it has no existence outside
/// a single parse call.
#[derive(Debug)]
pub struct SegmentState {
    pub region: Region,
    /// Consecutive blank lines seen while not in the body. Two or more are
    /// the signal that the next plain line starts the body.
    pub empty_header_lines: u32,
    body: String,
    copyright: String,
    current: Option<Document>,
}

impl Default for SegmentState {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            region: Region::Idle,
            empty_header_lines: 0,
            body: String::new(),
            copyright: String::new(),
            current: None,
        }
    }

    /// Whether a document is currently under construction.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.current.is_some()
    }

    pub fn document_mut(&mut self) -> Option<&mut Document> {
        self.current.as_mut()
    }

    /// Start a new document at a boundary marker, finalizing and returning
    /// the previous one if there was any. All per-document state resets.
    pub fn begin_document(&mut self) -> Option<Document> {
        let finished = self.finish();
        self.current = Some(Document::new());
        self.region = Region::Header;
        finished
    }

    /// Finalize the document under construction: freeze the body and
    /// copyright buffers into it and return it. Leaves the state idle.
    pub fn finish(&mut self) -> Option<Document> {
        let mut doc = self.current.take();
        if let Some(doc) = doc.as_mut() {
            doc.text = std::mem::take(&mut self.body);
            doc.copyright = std::mem::take(&mut self.copyright);
        } else {
            self.body.clear();
            self.copyright.clear();
        }
        self.region = Region::Idle;
        self.empty_header_lines = 0;
        doc
    }

    /// Append a content line to the body: trimmed, embedded newlines
    /// collapsed to spaces, joined to previous text with a single space.
    pub fn push_body_line(&mut self, line: &str) {
        let collapsed = line.trim().replace('\n', " ");
        if !self.body.is_empty() && !self.body.ends_with('\n') {
            self.body.push(' ');
        }
        self.body.push_str(&collapsed);
    }

    /// Append a paragraph separator to the body. Collapses runs: a break is
    /// only added after actual paragraph text.
    pub fn push_paragraph_break(&mut self) {
        if !self.body.is_empty() && !self.body.ends_with('\n') {
            self.body.push('\n');
        }
    }

    /// Append a line to the copyright block.
    pub fn push_copyright_line(&mut self, line: &str) {
        if !self.copyright.is_empty() {
            self.copyright.push(' ');
        }
        self.copyright.push_str(line.trim());
    }
}
