//! Core segmentation and classification engine for scripture-reference queries
//!
//! Given a normalized query string and the entities an external reference
//! recognizer found in it, this crate produces a gap-free, non-overlapping
//! sequence of typed components covering every byte of the query, aggregate
//! counts per component kind, and a routing recommendation.
//!
//! The engine is pure: it performs no I/O, holds no state across calls, and
//! returns a complete [`QueryResult`] for every input, including malformed
//! entity lists (which it repairs defensively).

#![warn(missing_docs)]

pub mod classify;
pub mod component;
pub mod entity;
pub mod segmenter;

// Re-export key types
pub use classify::classify_text;
pub use component::{
    Component, Counts, QueryResult, Recommendation, RecognitionFailure, Span, TextSubtype,
};
pub use entity::{AlternateCandidate, EntityKind, PassagePoint, RecognizedEntity};
pub use segmenter::segment;
