//! Output model for query segmentation
//!
//! A parse produces a [`QueryResult`]: the normalized query, an ordered list
//! of [`Component`]s whose spans tile the query exactly, per-kind [`Counts`],
//! and a [`Recommendation`]. The serialized vocabulary (`type` tags `text`,
//! `osis`, `book`, `invalid_osis`; subtype `space` rather than `whitespace`)
//! follows the established output format consumers already parse.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Byte range `[start, end)` into the normalized query string.
///
/// Spans always fall on `char` boundaries; the engine clamps recognizer
/// spans that do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start offset in bytes
    pub start: usize,
    /// Exclusive end offset in bytes
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers zero bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Classification of a plain-text component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSubtype {
    /// Contains at least one ASCII letter or digit
    Words,
    /// Entirely whitespace
    Space,
    /// Entirely Latin punctuation (ASCII punctuation, whitespace, or the
    /// Unicode general-punctuation block)
    Punctuation,
    /// Anything else: non-Latin scripts, unclassified symbols, or the empty
    /// string
    Other,
}

/// Diagnostic messages attached by the recognizer: code to position
pub type Messages = BTreeMap<String, usize>;

/// One segment of the query, tagged by kind
///
/// Which fields exist is a compile-time fact of the variant; optional fields
/// (`messages`, `alternates`) are omitted from serialized output when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    /// Plain text between recognized entities
    Text {
        /// Classification of the text
        subtype: TextSubtype,
        /// The exact substring of the query
        content: String,
        /// Location in the query
        span: Span,
    },
    /// A resolved reference with a canonical (osis) identifier
    Osis {
        /// Canonical identifier, never empty
        osis: String,
        /// The exact substring of the query
        content: String,
        /// Location in the query
        span: Span,
        /// Recognizer diagnostics, present only when non-empty
        #[serde(skip_serializing_if = "Option::is_none")]
        messages: Option<Messages>,
        /// Other valid readings of an ambiguous mention, in recognizer order
        #[serde(skip_serializing_if = "Option::is_none")]
        alternates: Option<Vec<String>>,
    },
    /// A bare book mention without a specific passage
    Book {
        /// Canonical identifier the recognizer resolved the book to
        osis: String,
        /// The exact substring of the query
        content: String,
        /// Location in the query
        span: Span,
        /// Recognizer diagnostics, present only when non-empty
        #[serde(skip_serializing_if = "Option::is_none")]
        messages: Option<Messages>,
    },
    /// Reference-shaped but unresolvable; carries no canonical identifier
    InvalidOsis {
        /// The exact substring of the query
        content: String,
        /// Location in the query
        span: Span,
        /// Recognizer diagnostics explaining why resolution failed
        #[serde(skip_serializing_if = "Option::is_none")]
        messages: Option<Messages>,
    },
}

impl Component {
    /// The span of this component, regardless of kind
    pub fn span(&self) -> Span {
        match self {
            Component::Text { span, .. }
            | Component::Osis { span, .. }
            | Component::Book { span, .. }
            | Component::InvalidOsis { span, .. } => *span,
        }
    }

    /// The exact substring this component covers
    pub fn content(&self) -> &str {
        match self {
            Component::Text { content, .. }
            | Component::Osis { content, .. }
            | Component::Book { content, .. }
            | Component::InvalidOsis { content, .. } => content,
        }
    }
}

/// Per-kind component tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// `Text` components classified as `words` or `other`
    pub words: u32,
    /// Resolved references
    pub osis: u32,
    /// Bare book mentions
    pub book: u32,
    /// Unresolvable reference-shaped mentions
    pub invalid_osis: u32,
}

/// How the consumer should treat the query as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    /// Route as a structured reference lookup
    Osis,
    /// Route as a full-text search
    Words,
    /// The query only contains invalid references
    Error,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Recommendation::Osis => "osis",
            Recommendation::Words => "words",
            Recommendation::Error => "error",
        };
        f.write_str(label)
    }
}

/// Diagnostic payload recorded when the external recognizer failed
///
/// Plain data: the failure was already recovered from (the call degraded to
/// "no entities found"), this is kept for observability only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionFailure {
    /// Human-readable description of the recognizer error
    pub message: String,
}

impl RecognitionFailure {
    /// Create a failure payload from an error message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The complete result of parsing one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The normalized query string the spans index into
    pub q: String,
    /// Per-kind component tallies
    pub counts: Counts,
    /// Ordered components; spans are contiguous, non-overlapping, and cover
    /// `[0, q.len())` exactly
    pub components: Vec<Component>,
    /// Routing recommendation derived from `counts`
    pub recommend: Recommendation,
    /// Present only when the recognizer failed for this call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RecognitionFailure>,
}
