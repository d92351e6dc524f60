//! Public API for verseq scripture-reference query parsing
//!
//! Pairs an external reference recognizer (injected through the
//! [`ReferenceRecognizer`] trait) with the pure segmentation engine in
//! `verseq-core`. The single entry point, [`QueryParser::parse`], never
//! fails: for any input string it produces a [`QueryResult`] whose
//! components tile the normalized query exactly, plus a recommendation for
//! routing the query downstream.
//!
//! ```
//! use verseq_api::{QueryParser, ReferenceRecognizer, Result};
//! use verseq_core::RecognizedEntity;
//!
//! /// A recognizer that never finds anything.
//! struct NoRefs;
//!
//! impl ReferenceRecognizer for NoRefs {
//!     fn recognize(&mut self, _query: &str) -> Result<Vec<RecognizedEntity>> {
//!         Ok(Vec::new())
//!     }
//!     fn reset(&mut self) {}
//! }
//!
//! let mut parser = QueryParser::new(Box::new(NoRefs));
//! let result = parser.parse("daily bread");
//! assert_eq!(result.recommend.to_string(), "words");
//! assert_eq!(result.counts.words, 1);
//! ```

#![warn(missing_docs)]

pub mod adapter;
pub mod error;
pub mod recognizer;

use unicode_normalization::UnicodeNormalization;

// Re-export key types
pub use adapter::RecognizerAdapter;
pub use error::{RecognitionError, Result};
pub use recognizer::{RecognizerOptions, ReferenceRecognizer};

// Re-export the output model for convenience
pub use verseq_core::{
    AlternateCandidate, Component, Counts, EntityKind, PassagePoint, QueryResult, Recommendation,
    RecognitionFailure, RecognizedEntity, Span, TextSubtype,
};

/// Parses free-text queries into typed component breakdowns
///
/// Owns the recognizer instance for its lifetime. `parse` takes `&mut self`
/// because the recognizer supports at most one in-flight recognition at a
/// time; concurrent callers should hold the parser behind a mutex or build
/// one parser per worker.
pub struct QueryParser {
    adapter: RecognizerAdapter,
}

impl std::fmt::Debug for QueryParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryParser").finish_non_exhaustive()
    }
}

impl QueryParser {
    /// Create a parser around a recognizer instance
    pub fn new(recognizer: Box<dyn ReferenceRecognizer>) -> Self {
        Self {
            adapter: RecognizerAdapter::new(recognizer),
        }
    }

    /// Parse a query into its component breakdown
    ///
    /// The query is normalized to Unicode composed form (NFC) first: the
    /// recognizer's grammar assumes precomposed characters, and decomposed
    /// input would fail to match diacritic-bearing book names. All spans in
    /// the result index into the normalized string, returned as
    /// [`QueryResult::q`].
    ///
    /// Never fails, for any input including the empty string. A recognizer
    /// failure degrades to "no entities found" and is reported through
    /// [`QueryResult::error`].
    pub fn parse(&mut self, query: &str) -> QueryResult {
        let normalized: String = query.nfc().collect();
        let (entities, failure) = self.adapter.recognize(&normalized);
        let mut result = verseq_core::segment(&normalized, entities);
        result.error = failure;
        result
    }
}

/// Render a result as JSON in the established output vocabulary
pub fn to_json(result: &QueryResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}
