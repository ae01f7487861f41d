//! Array-field operations under the dedupe-and-sort storage policy.

use crate::patch::FieldMode;
use crate::runlog::RunLog;
use std::collections::BTreeSet;

/// Reserved value that empties an array field inside a delete operation.
pub const DELETE_ALL_SENTINEL: &str = "DELETE_ENTIRE_ARRAY";

/// Applies one normalized input sequence to `current` under `mode`.
///
/// `name` and `field` only feed diagnostics. Anomalies (duplicate appends,
/// deletions of absent entries) become log events, never errors.
pub fn apply(
    current: &mut Vec<String>,
    input: Vec<String>,
    mode: FieldMode,
    name: &str,
    field: &str,
    log: &mut RunLog,
) {
    match mode {
        FieldMode::Append => append(current, input, name, field, log),
        FieldMode::Reset => *current = dedupe_sorted(input),
        FieldMode::Delete => delete(current, input, name, field, log),
    }
}

fn append(current: &mut Vec<String>, input: Vec<String>, name: &str, field: &str, log: &mut RunLog) {
    let duplicates: Vec<&String> = input.iter().filter(|item| current.contains(item)).collect();
    if !duplicates.is_empty() {
        log.info(format!("'{name}' ({field}): skipped duplicates {duplicates:?}"));
    }
    let mut merged: BTreeSet<String> = current.drain(..).collect();
    merged.extend(input);
    *current = merged.into_iter().collect();
}

fn delete(current: &mut Vec<String>, input: Vec<String>, name: &str, field: &str, log: &mut RunLog) {
    if matches!(input.as_slice(), [only] if only == DELETE_ALL_SENTINEL) {
        current.clear();
        return;
    }
    let not_found: Vec<&String> = input.iter().filter(|item| !current.contains(item)).collect();
    if !not_found.is_empty() {
        log.warn(format!(
            "'{name}': cannot delete non-existent {field} entries {not_found:?}"
        ));
    }
    let removals: BTreeSet<&String> = input.iter().collect();
    // Survivors keep their current order; only append and reset re-sort.
    current.retain(|item| !removals.contains(item));
}

fn dedupe_sorted(input: Vec<String>) -> Vec<String> {
    input.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}
