//! Match engine used by the omission and masking rules
//!
//! All matching is case-sensitive and performed on the raw text.

use regex::Regex;

/// True if `candidate` contains any of `literals` as a substring
pub fn contains_any(candidate: &str, literals: &[String]) -> bool {
    literals.iter().any(|literal| candidate.contains(literal.as_str()))
}

/// True if any of `patterns` matches somewhere in `candidate` (unanchored)
pub fn matches_any(candidate: &str, patterns: &[Regex]) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(candidate))
}

/// True if `key` is exactly one of `keys`
pub fn is_key_in(key: &str, keys: &[String]) -> bool {
    keys.iter().any(|k| k == key)
}

/// Insert strings keeping first-insertion order; duplicates are dropped.
///
/// The empty string is a rule like any other: as a literal it is contained
/// in every message, as a key it matches an empty field key.
pub(crate) fn extend_unique_strings<I, S>(set: &mut Vec<String>, items: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for item in items {
        let item = item.into();
        if !set.contains(&item) {
            set.push(item);
        }
    }
}

/// Insert patterns keeping first-insertion order; two patterns are the same
/// rule when their source text is identical.
pub(crate) fn extend_unique_patterns<I>(set: &mut Vec<Regex>, items: I)
where
    I: IntoIterator<Item = Regex>,
{
    for item in items {
        if !set.iter().any(|existing| existing.as_str() == item.as_str()) {
            set.push(item);
        }
    }
}
