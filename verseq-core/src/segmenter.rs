//! The segmentation walk
//!
//! Reconciles the recognizer's entity list against the normalized query to
//! produce the gap-free component sequence, counts, and recommendation.
//! Malformed entity lists are a contract violation by the adapter; they are
//! repaired here (clamp, drop, re-sort) rather than allowed to corrupt the
//! result or panic.

use crate::classify::{classify_text, counts_as_words};
use crate::component::{Component, Counts, QueryResult, Recommendation, Span};
use crate::entity::{EntityKind, RecognizedEntity};
use tracing::warn;

/// Build a [`QueryResult`] from a normalized query and the entities the
/// recognizer found in it.
///
/// Pure and infallible: any input, including an empty query or a malformed
/// entity list, yields a result whose component spans tile `[0, query.len())`
/// exactly.
pub fn segment(query: &str, entities: Vec<RecognizedEntity>) -> QueryResult {
    let entities = sanitize(query, entities);
    let mut counts = Counts::default();
    let mut components = Vec::with_capacity(entities.len() * 2 + 1);

    if entities.is_empty() {
        push_text(query, 0, query.len(), &mut components, &mut counts);
        // Deliberate special case: with no entities at all, the query is a
        // search no matter what the lone text component classified as.
        return QueryResult {
            q: query.to_owned(),
            counts,
            components,
            recommend: Recommendation::Words,
            error: None,
        };
    }

    let mut cursor = 0;
    for entity in entities {
        if entity.span.start > cursor {
            push_text(query, cursor, entity.span.start, &mut components, &mut counts);
        }
        cursor = entity.span.end;
        components.push(to_component(query, entity, &mut counts));
    }
    if cursor < query.len() {
        push_text(query, cursor, query.len(), &mut components, &mut counts);
    }

    let recommend = recommend(&counts);
    QueryResult {
        q: query.to_owned(),
        counts,
        components,
        recommend,
        error: None,
    }
}

/// Recommendation precedence over the counts.
///
/// A bare book mention surrounded by prose (`words > 0`) routes to a keyword
/// search rather than a reference lookup, so `words` outranks `book`.
fn recommend(counts: &Counts) -> Recommendation {
    if counts.osis > 0 {
        Recommendation::Osis
    } else if counts.words > 0 {
        Recommendation::Words
    } else if counts.book > 0 {
        Recommendation::Osis
    } else if counts.invalid_osis > 0 {
        Recommendation::Error
    } else {
        Recommendation::Words
    }
}

fn to_component(query: &str, entity: RecognizedEntity, counts: &mut Counts) -> Component {
    let span = entity.span;
    let content = query[span.start..span.end].to_owned();
    let messages = if entity.messages.is_empty() {
        None
    } else {
        Some(entity.messages)
    };
    match entity.kind {
        EntityKind::Book => {
            counts.book += 1;
            Component::Book {
                osis: entity.osis,
                content,
                span,
                messages,
            }
        }
        EntityKind::Reference if entity.osis.is_empty() => {
            counts.invalid_osis += 1;
            Component::InvalidOsis {
                content,
                span,
                messages,
            }
        }
        EntityKind::Reference => {
            counts.osis += 1;
            let alternates: Vec<String> = entity
                .alternates
                .iter()
                .filter(|alt| alt.valid)
                .map(|alt| alt.osis())
                .collect();
            Component::Osis {
                osis: entity.osis,
                content,
                span,
                messages,
                alternates: if alternates.is_empty() {
                    None
                } else {
                    Some(alternates)
                },
            }
        }
    }
}

fn push_text(
    query: &str,
    start: usize,
    end: usize,
    components: &mut Vec<Component>,
    counts: &mut Counts,
) {
    let content = &query[start..end];
    let subtype = classify_text(content);
    if counts_as_words(subtype) {
        counts.words += 1;
    }
    components.push(Component::Text {
        subtype,
        content: content.to_owned(),
        span: Span::new(start, end),
    });
}

/// Repair the recognizer contract: spans in bounds, on char boundaries,
/// non-inverted, non-overlapping, in non-decreasing start order.
///
/// Each repair is an internal inconsistency worth surfacing in logs, not a
/// reason to fail the parse.
fn sanitize(query: &str, mut entities: Vec<RecognizedEntity>) -> Vec<RecognizedEntity> {
    let unordered = entities
        .windows(2)
        .any(|pair| pair[0].span.start > pair[1].span.start);
    if unordered {
        warn!("recognizer returned entities out of span order; re-sorting");
        entities.sort_by_key(|entity| entity.span.start);
    }

    let mut accepted: Vec<RecognizedEntity> = Vec::with_capacity(entities.len());
    let mut cursor = 0;
    for mut entity in entities {
        let clamped = Span::new(
            floor_char_boundary(query, entity.span.start),
            floor_char_boundary(query, entity.span.end),
        );
        if clamped != entity.span {
            warn!(
                start = entity.span.start,
                end = entity.span.end,
                len = query.len(),
                "entity span out of bounds or off a char boundary; clamping"
            );
            entity.span = clamped;
        }
        if entity.span.start > entity.span.end {
            warn!(
                start = entity.span.start,
                end = entity.span.end,
                "dropping entity with inverted span"
            );
            continue;
        }
        if entity.span.start < cursor {
            warn!(
                start = entity.span.start,
                cursor, "dropping entity overlapping its predecessor"
            );
            continue;
        }
        cursor = entity.span.end;
        accepted.push(entity);
    }
    accepted
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
