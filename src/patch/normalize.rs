//! Patch-value normalization into ordered token sequences.

use crate::patch::PatchValue;

/// Expands a patch-declared value into its ordered token sequence.
///
/// Strings split on commas and whitespace runs; lists flatten element-wise,
/// so authors can mix delimited strings and native sequences freely. Quoting
/// selects escape handling per token: single quotes keep the inner content
/// verbatim (raw-regex authoring), double quotes strip one layer of
/// JSON-style backslash escaping (values pasted from JSON sources), and
/// unquoted tokens pass through untouched. Token order is stable; callers
/// re-sort where storage policy demands it.
pub fn normalize(value: &PatchValue) -> Vec<String> {
    match value {
        PatchValue::Text(text) => split_tokens(text),
        PatchValue::List(items) => items.iter().flat_map(normalize).collect(),
        PatchValue::Bool(_) | PatchValue::Unsupported => Vec::new(),
    }
}

fn split_tokens(text: &str) -> Vec<String> {
    text.replace(',', " ").split_whitespace().map(unquote).collect()
}

fn unquote(token: &str) -> String {
    if let Some(inner) = strip_wrapping(token, '\'') {
        inner.to_string()
    } else if let Some(inner) = strip_wrapping(token, '"') {
        // Escaped backslashes first, then escaped quotes.
        inner.replace("\\\\", "\\").replace("\\\"", "\"")
    } else {
        token.to_string()
    }
}

fn strip_wrapping(token: &str, quote: char) -> Option<&str> {
    if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}
