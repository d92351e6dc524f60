//! Text-subtype classification
//!
//! Each textual gap between recognized entities is classified once, by
//! explicit character-class predicates in a fixed precedence order. The
//! class boundaries live here as named constants so the membership is an
//! explicit fact of this module rather than an artifact of some regex
//! engine's default classes.

use crate::component::TextSubtype;

/// First code point of the Unicode general-punctuation block
pub const GENERAL_PUNCTUATION_FIRST: char = '\u{2000}';
/// Last code point of the Unicode general-punctuation block
pub const GENERAL_PUNCTUATION_LAST: char = '\u{206F}';

/// Classify a gap substring, first match wins:
///
/// 1. contains an ASCII letter or digit → [`TextSubtype::Words`]
/// 2. non-empty, all whitespace → [`TextSubtype::Space`]
/// 3. non-empty, all Latin punctuation (including interior whitespace) →
///    [`TextSubtype::Punctuation`]
/// 4. anything else, including the empty string → [`TextSubtype::Other`]
pub fn classify_text(text: &str) -> TextSubtype {
    if text.chars().any(|c| c.is_ascii_alphanumeric()) {
        TextSubtype::Words
    } else if !text.is_empty() && text.chars().all(char::is_whitespace) {
        TextSubtype::Space
    } else if !text.is_empty() && text.chars().all(is_latin_punctuation) {
        TextSubtype::Punctuation
    } else {
        // Could distinguish non-Latin letters from symbols here, but
        // consumers treat `other` as search terms anyway.
        TextSubtype::Other
    }
}

/// Whether a text component of this subtype counts toward `counts.words`
pub(crate) fn counts_as_words(subtype: TextSubtype) -> bool {
    matches!(subtype, TextSubtype::Words | TextSubtype::Other)
}

fn is_latin_punctuation(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_punctuation()
        || (GENERAL_PUNCTUATION_FIRST..=GENERAL_PUNCTUATION_LAST).contains(&c)
}
