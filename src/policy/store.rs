//! Additive omission and masking rules
//!
//! A `PolicyStore` only ever grows. Omission is decided first; masking runs
//! only for entries that survive it.

use super::matching::{
    contains_any, extend_unique_patterns, extend_unique_strings, is_key_in, matches_any,
};
use crate::core::{FieldArgs, FieldValue};
use regex::{NoExpand, Regex};

/// Replacement written over masked values and message spans
pub const MASK_TOKEN: &str = "***";

/// Rule sets attached to one role in a context.
///
/// Each set keeps insertion order and ignores duplicates, so adding the same
/// rule twice has no further effect.
#[derive(Debug, Clone, Default)]
pub struct PolicyStore {
    omit_log_with_field_keys: Vec<String>,
    omit_log_with_message_regexes: Vec<Regex>,
    omit_log_with_message_strings: Vec<String>,
    mask_field_values_with_field_keys: Vec<String>,
    mask_message_regexes: Vec<Regex>,
    mask_message_strings: Vec<String>,
}

impl PolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_omit_log_with_field_keys<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique_strings(&mut self.omit_log_with_field_keys, keys);
    }

    pub fn add_omit_log_with_message_regexes<I>(&mut self, expressions: I)
    where
        I: IntoIterator<Item = Regex>,
    {
        extend_unique_patterns(&mut self.omit_log_with_message_regexes, expressions);
    }

    pub fn add_omit_log_with_message_strings<I, S>(&mut self, matching: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique_strings(&mut self.omit_log_with_message_strings, matching);
    }

    pub fn add_mask_field_values_with_field_keys<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique_strings(&mut self.mask_field_values_with_field_keys, keys);
    }

    pub fn add_mask_message_regexes<I>(&mut self, expressions: I)
    where
        I: IntoIterator<Item = Regex>,
    {
        extend_unique_patterns(&mut self.mask_message_regexes, expressions);
    }

    pub fn add_mask_message_strings<I, S>(&mut self, matching: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique_strings(&mut self.mask_message_strings, matching);
    }

    pub fn omit_log_with_field_keys(&self) -> &[String] {
        &self.omit_log_with_field_keys
    }

    pub fn omit_log_with_message_regexes(&self) -> &[Regex] {
        &self.omit_log_with_message_regexes
    }

    pub fn omit_log_with_message_strings(&self) -> &[String] {
        &self.omit_log_with_message_strings
    }

    pub fn mask_field_values_with_field_keys(&self) -> &[String] {
        &self.mask_field_values_with_field_keys
    }

    pub fn mask_message_regexes(&self) -> &[Regex] {
        &self.mask_message_regexes
    }

    pub fn mask_message_strings(&self) -> &[String] {
        &self.mask_message_strings
    }

    pub fn is_empty(&self) -> bool {
        self.omit_log_with_field_keys.is_empty()
            && self.omit_log_with_message_regexes.is_empty()
            && self.omit_log_with_message_strings.is_empty()
            && self.mask_field_values_with_field_keys.is_empty()
            && self.mask_message_regexes.is_empty()
            && self.mask_message_strings.is_empty()
    }

    /// Whether an entry must be dropped.
    ///
    /// Checks field keys of both sets, then message patterns, then message
    /// literals; the first hit wins. Field values are never inspected.
    pub fn should_omit(
        &self,
        message: &str,
        permanent: &[(String, FieldValue)],
        transient: &[(String, FieldValue)],
    ) -> bool {
        let omitted_by_key = permanent
            .iter()
            .chain(transient.iter())
            .any(|(key, _)| is_key_in(key, &self.omit_log_with_field_keys));

        omitted_by_key
            || matches_any(message, &self.omit_log_with_message_regexes)
            || contains_any(message, &self.omit_log_with_message_strings)
    }

    /// Rewrite the message and per-call fields in place.
    ///
    /// Every rule is applied: field-key masking, then message patterns, then
    /// message literals. Keys are never added or removed, and permanently
    /// bound fields are left alone.
    pub fn apply_mask(&self, message: &mut String, transient: &mut FieldArgs) {
        if !self.mask_field_values_with_field_keys.is_empty() {
            for (key, value) in transient.iter_mut() {
                if is_key_in(key, &self.mask_field_values_with_field_keys) {
                    *value = FieldValue::String(MASK_TOKEN.to_string());
                }
            }
        }

        for pattern in &self.mask_message_regexes {
            if pattern.is_match(message.as_str()) {
                *message = pattern
                    .replace_all(message.as_str(), NoExpand(MASK_TOKEN))
                    .into_owned();
            }
        }

        // An empty literal matches between every pair of characters; it is
        // kept for omission but never used as a replacement target.
        for literal in &self.mask_message_strings {
            if !literal.is_empty() && message.contains(literal.as_str()) {
                *message = message.replace(literal.as_str(), MASK_TOKEN);
            }
        }
    }
}
