//! The external-recognizer seam
//!
//! The reference recognizer is an external collaborator consumed as an
//! oracle: given an already-normalized query it reports the entities it
//! found, each with a span, kind, canonical identifier, diagnostics, and
//! alternate readings. Its grammar and ambiguity resolution are out of scope
//! here; this module only fixes the trait it is consumed through and the
//! configuration it is constructed with.

use crate::error::Result;
use verseq_core::RecognizedEntity;

/// An external scripture-reference recognizer
///
/// Implementations are constructed once with a fixed [`RecognizerOptions`]
/// and may keep internal mutable state between calls. The contract for
/// [`recognize`](Self::recognize): spans are byte offsets into the given
/// (NFC-normalized) query, on `char` boundaries, non-decreasing and
/// non-overlapping. The adapter validates rather than trusts this.
///
/// A recognizer instance supports at most one in-flight recognition at a
/// time; concurrent callers must synchronize externally or use one instance
/// per worker.
pub trait ReferenceRecognizer {
    /// Find all reference entities in a normalized query
    fn recognize(&mut self, query: &str) -> Result<Vec<RecognizedEntity>>;

    /// Discard internal state and reinitialize with the original
    /// configuration
    ///
    /// Called by the adapter after any [`recognize`](Self::recognize)
    /// failure, so a corrupted state cannot leak into subsequent calls.
    fn reset(&mut self);
}

/// How bare book sequences are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceHandling {
    /// Each book in a sequence becomes a distinct book entity
    #[default]
    Include,
    /// Sequences of bare books are ignored
    Ignore,
}

/// What a book mentioned without a chapter resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BareBookResolution {
    /// Resolve to chapter 1 of the book
    #[default]
    FirstChapter,
    /// Resolve to the whole book
    FullBook,
}

/// Whether invalid passages and sequences are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidHandling {
    /// Emit invalid mentions as entities so they can be classified
    #[default]
    Include,
    /// Drop invalid mentions silently
    Ignore,
}

/// How numerals in non-Latin scripts are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitHandling {
    /// Map to Latin digits before matching
    #[default]
    Replace,
    /// Leave as-is (they will not match the grammar)
    Ignore,
}

/// How far canonical identifiers compact when full precision is unnecessary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OsisCompaction {
    /// Compact ranges to `book.chapter` form
    #[default]
    BookChapter,
    /// Always carry verse-level detail
    BookChapterVerse,
}

/// How an ambiguous multi-reference mention is combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceCombination {
    /// Each mention is a separate entity
    #[default]
    Separate,
    /// Mentions merge into one combined entity
    Combine,
}

/// How a stated chapter or verse `0` is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroHandling {
    /// Upgrade to 1
    #[default]
    Upgrade,
    /// Treat as invalid
    Error,
}

/// Fixed recognizer configuration, set once at initialization
///
/// `Default` yields the configuration this system is specified against;
/// [`ReferenceRecognizer::reset`] must restore exactly the options the
/// instance was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerOptions {
    /// Bare book sequences become distinct book entities
    pub book_sequences: SequenceHandling,
    /// A book without a chapter resolves to chapter 1
    pub bare_book: BareBookResolution,
    /// Digits immediately after a cross-reference's end fold into it
    pub captive_end_digits: bool,
    /// Deuterocanonical/apocryphal books are part of the vocabulary
    pub include_apocrypha: bool,
    /// Invalid passages and sequences are still emitted as entities
    pub invalid_passages: InvalidHandling,
    /// Non-Latin numerals map to Latin digits before matching
    pub non_latin_digits: DigitHandling,
    /// Ranges compact to `book.chapter` when verse detail is unnecessary
    pub osis_compaction: OsisCompaction,
    /// Each mention of an ambiguous multi-reference is a separate entity
    pub sequence_combination: SequenceCombination,
    /// A stated chapter 0 upgrades to 1
    pub zero_chapter: ZeroHandling,
    /// A stated verse 0 upgrades to 1
    pub zero_verse: ZeroHandling,
}

impl Default for RecognizerOptions {
    fn default() -> Self {
        Self {
            book_sequences: SequenceHandling::Include,
            bare_book: BareBookResolution::FirstChapter,
            captive_end_digits: true,
            include_apocrypha: true,
            invalid_passages: InvalidHandling::Include,
            non_latin_digits: DigitHandling::Replace,
            osis_compaction: OsisCompaction::BookChapter,
            sequence_combination: SequenceCombination::Separate,
            zero_chapter: ZeroHandling::Upgrade,
            zero_verse: ZeroHandling::Upgrade,
        }
    }
}
