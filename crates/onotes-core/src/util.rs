//! Shared utility functions used across multiple modules.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Locale-style name ordering.
///
/// Names compare by base letters first, ignoring case and diacritics, so
/// "Über" sorts next to "uber". Remaining ties are broken by accents
/// (unaccented first), then by case (lowercase first), then by bytes.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let (left, right) = (CollationKey::new(a), CollationKey::new(b));
    left.base
        .cmp(&right.base)
        .then_with(|| left.accents.cmp(&right.accents))
        .then_with(|| left.uppercase.cmp(&right.uppercase))
        .then_with(|| a.cmp(b))
}

struct CollationKey {
    /// Lowercase letters with combining marks stripped
    base: String,
    /// Lowercase decomposed form, marks kept
    accents: String,
    /// Case of each base letter; `false` (lowercase) sorts first
    uppercase: Vec<bool>,
}

impl CollationKey {
    fn new(name: &str) -> Self {
        let mut base = String::with_capacity(name.len());
        let mut accents = String::with_capacity(name.len());
        let mut uppercase = Vec::with_capacity(name.len());

        for c in name.nfd() {
            accents.extend(c.to_lowercase());
            if is_combining_mark(c) {
                continue;
            }
            base.extend(c.to_lowercase());
            uppercase.push(c.is_uppercase());
        }

        Self {
            base,
            accents,
            uppercase,
        }
    }
}
