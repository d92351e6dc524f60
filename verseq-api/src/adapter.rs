//! Recognizer adapter
//!
//! Owns the recognizer instance, invokes it, and keeps its shared state
//! healthy: any recognition failure triggers a reset before the next call,
//! and the failure degrades to an empty entity list plus a diagnostic
//! payload rather than a hard error. Out-of-order entity lists are re-sorted
//! here; span-level repair is the engine's job.

use crate::recognizer::ReferenceRecognizer;
use tracing::warn;
use verseq_core::{RecognitionFailure, RecognizedEntity};

/// Wraps the external recognizer behind the "entities or empty" contract
pub struct RecognizerAdapter {
    recognizer: Box<dyn ReferenceRecognizer>,
}

impl std::fmt::Debug for RecognizerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecognizerAdapter").finish_non_exhaustive()
    }
}

impl RecognizerAdapter {
    /// Wrap a recognizer instance
    pub fn new(recognizer: Box<dyn ReferenceRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Recognize entities in an already-normalized query
    ///
    /// Never fails: a recognizer error resets the recognizer and yields an
    /// empty entity list with the failure attached.
    pub fn recognize(
        &mut self,
        query: &str,
    ) -> (Vec<RecognizedEntity>, Option<RecognitionFailure>) {
        match self.recognizer.recognize(query) {
            Ok(entities) => (Self::ordered(entities), None),
            Err(err) => {
                warn!(error = %err, "recognizer failed; resetting its state");
                self.recognizer.reset();
                (Vec::new(), Some(RecognitionFailure::from(&err)))
            }
        }
    }

    /// The recognizer guarantees non-decreasing span starts for a single
    /// configuration; validate instead of assuming.
    fn ordered(mut entities: Vec<RecognizedEntity>) -> Vec<RecognizedEntity> {
        let unordered = entities
            .windows(2)
            .any(|pair| pair[0].span.start > pair[1].span.start);
        if unordered {
            warn!("recognizer returned entities out of span order; re-sorting");
            entities.sort_by_key(|entity| entity.span.start);
        }
        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RecognitionError, Result};
    use verseq_core::Span;

    struct FlakyRecognizer {
        fail_next: bool,
        resets: usize,
    }

    impl ReferenceRecognizer for FlakyRecognizer {
        fn recognize(&mut self, _query: &str) -> Result<Vec<RecognizedEntity>> {
            if self.fail_next {
                return Err(RecognitionError::Internal {
                    message: "grammar state corrupted".into(),
                });
            }
            Ok(vec![RecognizedEntity::book(Span::new(0, 4), "John.1")])
        }

        fn reset(&mut self) {
            self.fail_next = false;
            self.resets += 1;
        }
    }

    #[test]
    fn failure_resets_and_degrades_to_empty() {
        let mut adapter = RecognizerAdapter::new(Box::new(FlakyRecognizer {
            fail_next: true,
            resets: 0,
        }));

        let (entities, failure) = adapter.recognize("John");
        assert!(entities.is_empty());
        let failure = failure.unwrap();
        assert!(failure.message.contains("grammar state corrupted"));

        // The reset restored the recognizer for the next call.
        let (entities, failure) = adapter.recognize("John");
        assert_eq!(entities.len(), 1);
        assert!(failure.is_none());
    }

    struct UnorderedRecognizer;

    impl ReferenceRecognizer for UnorderedRecognizer {
        fn recognize(&mut self, _query: &str) -> Result<Vec<RecognizedEntity>> {
            Ok(vec![
                RecognizedEntity::book(Span::new(5, 9), "Mark.1"),
                RecognizedEntity::book(Span::new(0, 4), "John.1"),
            ])
        }

        fn reset(&mut self) {}
    }

    #[test]
    fn out_of_order_entities_are_resorted() {
        let mut adapter = RecognizerAdapter::new(Box::new(UnorderedRecognizer));
        let (entities, failure) = adapter.recognize("John Mark");
        assert!(failure.is_none());
        assert_eq!(entities[0].span, Span::new(0, 4));
        assert_eq!(entities[1].span, Span::new(5, 9));
    }
}
