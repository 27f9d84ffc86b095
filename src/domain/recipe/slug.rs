// src/domain/recipe/slug.rs
//! Title to slug conversion.
//!
//! The output of [`slugify`] is persisted and shared in links, so the
//! algorithm has to stay stable: NFD decomposition, combining marks
//! dropped, everything but ASCII word characters, whitespace and
//! hyphens dropped, whitespace and hyphen runs collapsed, lowercased.

use unicode_normalization::UnicodeNormalization;

const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Convert a free-text title into a URL-safe token.
///
/// Returns an empty string when nothing survives the filtering; callers
/// decide whether that is an error.
pub fn slugify(title: &str) -> String {
    let filtered: String = title
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .filter_map(|c| {
            if is_word_separator(c) {
                Some(' ')
            } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace() {
                Some(c)
            } else {
                None
            }
        })
        .collect();

    let mut slug = String::with_capacity(filtered.len());
    for c in filtered.trim().chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c.to_ascii_lowercase());
    }
    slug
}

// Elided vowels ("l'ancienne", "d’été") keep their words apart.
fn is_word_separator(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}
