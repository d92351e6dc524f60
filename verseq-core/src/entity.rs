//! Recognized-entity records crossing the adapter boundary
//!
//! The external recognizer reports loosely-typed match data; the adapter
//! narrows it to the fixed [`RecognizedEntity`] shape before it reaches the
//! engine. Nothing in here borrows from recognizer internals.

use crate::component::{Messages, Span};

/// What kind of mention the recognizer matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A bare book name with no chapter or verse
    Book,
    /// A full reference (which may still have failed to resolve)
    Reference,
}

/// A partial passage position: book plus optional chapter and verse
///
/// A verse without a chapter is meaningless and is ignored when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassagePoint {
    /// Canonical book abbreviation, e.g. `"Matt"`
    pub book: String,
    /// Chapter number, if stated
    pub chapter: Option<u32>,
    /// Verse number, if stated
    pub verse: Option<u32>,
}

impl PassagePoint {
    /// A book-only position
    pub fn book(book: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter: None,
            verse: None,
        }
    }

    /// A book-and-chapter position
    pub fn chapter(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter: Some(chapter),
            verse: None,
        }
    }

    /// A fully specified position
    pub fn verse(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter: Some(chapter),
            verse: Some(verse),
        }
    }

    /// Render as a canonical (osis) identifier: `book[.chapter[.verse]]`
    pub fn osis(&self) -> String {
        let mut osis = self.book.clone();
        if let Some(chapter) = self.chapter {
            osis.push('.');
            osis.push_str(&chapter.to_string());
            if let Some(verse) = self.verse {
                osis.push('.');
                osis.push_str(&verse.to_string());
            }
        }
        osis
    }
}

/// One alternate reading of an ambiguous mention, as reported raw by the
/// recognizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateCandidate {
    /// Start of the alternate reading
    pub start: PassagePoint,
    /// End of the alternate reading
    pub end: PassagePoint,
    /// Whether the recognizer judged this reading valid
    pub valid: bool,
}

impl AlternateCandidate {
    /// A valid candidate covering a single position
    pub fn point(at: PassagePoint) -> Self {
        Self {
            start: at.clone(),
            end: at,
            valid: true,
        }
    }

    /// A valid candidate covering a range
    pub fn range(start: PassagePoint, end: PassagePoint) -> Self {
        Self {
            start,
            end,
            valid: true,
        }
    }

    /// Mark the candidate invalid
    pub fn invalid(mut self) -> Self {
        self.valid = false;
        self
    }

    /// Render as a canonical identifier: the start alone when start and end
    /// render equal, otherwise `start-end`
    pub fn osis(&self) -> String {
        let start = self.start.osis();
        let end = self.end.osis();
        if start == end {
            start
        } else {
            format!("{start}-{end}")
        }
    }
}

/// One entity reported by the recognizer for a query
///
/// Spans are byte offsets into the normalized query, expected to be
/// non-decreasing and non-overlapping across the list; the engine repairs
/// violations rather than trusting the contract.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedEntity {
    /// Location of the mention in the query
    pub span: Span,
    /// Book-only mention or full reference
    pub kind: EntityKind,
    /// Canonical identifier; empty means the mention failed to resolve
    pub osis: String,
    /// Recognizer diagnostics (why resolution failed or was adjusted)
    pub messages: Messages,
    /// Raw alternate readings of an ambiguous mention
    pub alternates: Vec<AlternateCandidate>,
}

impl RecognizedEntity {
    /// A bare book mention resolved to `osis`
    pub fn book(span: Span, osis: impl Into<String>) -> Self {
        Self {
            span,
            kind: EntityKind::Book,
            osis: osis.into(),
            messages: Messages::new(),
            alternates: Vec::new(),
        }
    }

    /// A resolved reference
    pub fn reference(span: Span, osis: impl Into<String>) -> Self {
        Self {
            span,
            kind: EntityKind::Reference,
            osis: osis.into(),
            messages: Messages::new(),
            alternates: Vec::new(),
        }
    }

    /// A reference-shaped mention that failed to resolve
    pub fn invalid(span: Span) -> Self {
        Self::reference(span, "")
    }

    /// Attach a diagnostic message
    pub fn with_message(mut self, code: impl Into<String>, position: usize) -> Self {
        self.messages.insert(code.into(), position);
        self
    }

    /// Attach alternate readings
    pub fn with_alternates(mut self, alternates: Vec<AlternateCandidate>) -> Self {
        self.alternates = alternates;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passage_point_renders_each_depth() {
        assert_eq!(PassagePoint::book("Phlm").osis(), "Phlm");
        assert_eq!(PassagePoint::chapter("Phil", 2).osis(), "Phil.2");
        assert_eq!(PassagePoint::verse("John", 3, 16).osis(), "John.3.16");
    }

    #[test]
    fn verse_without_chapter_is_ignored() {
        let point = PassagePoint {
            book: "Gen".into(),
            chapter: None,
            verse: Some(4),
        };
        assert_eq!(point.osis(), "Gen");
    }

    #[test]
    fn alternate_collapses_equal_endpoints() {
        let point = AlternateCandidate::point(PassagePoint::chapter("Jonah", 1));
        assert_eq!(point.osis(), "Jonah.1");

        let range = AlternateCandidate::range(
            PassagePoint::chapter("Matt", 5),
            PassagePoint::chapter("Matt", 7),
        );
        assert_eq!(range.osis(), "Matt.5-Matt.7");
    }
}
