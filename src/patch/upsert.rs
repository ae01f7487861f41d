//! Single-record patch application.
//!
//! One patch object against one named record: classify the operation from
//! the originating section, route each declared field to scalar overwrite or
//! the array operator, then derive `completeProvider` unless the patch set
//! it explicitly. Every anomaly degrades to a log event so one bad field
//! never blocks the rest of the merge.

use crate::catalog::{Catalog, FieldKind, Record, classify_field};
use crate::patch::normalize::normalize;
use crate::patch::{FieldKey, FieldMode, PatchObject, PatchValue, array_op};
use crate::runlog::RunLog;

/// Which document section an upsert came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatchOrigin {
    Add,
    Modify,
}

/// Applies `patch` to the record called `name`, creating it when absent.
///
/// An empty or null patch object is a no-op. An add of an existing record
/// degrades to a merge, a modify of a missing record degrades to a create;
/// both degradations warn instead of failing.
pub fn upsert_record(
    catalog: &mut Catalog,
    name: &str,
    patch: &PatchObject,
    origin: PatchOrigin,
    log: &mut RunLog,
) {
    if patch.is_empty() {
        return;
    }

    let exists = catalog.providers.contains_key(name);
    let action = match (origin, exists) {
        (PatchOrigin::Add, false) => Some("Create"),
        (PatchOrigin::Modify, true) => Some("Modify"),
        (PatchOrigin::Add, true) => {
            log.warn(format!("duplicate add: '{name}' already exists, merging changes"));
            None
        }
        (PatchOrigin::Modify, false) => {
            log.warn(format!("missing modify: '{name}' not found, creating new record"));
            None
        }
    };
    if let Some(action) = action {
        log.info(format!("[{action}] {name}"));
    }

    let record = catalog
        .providers
        .entry(name.to_string())
        .or_insert_with(Record::template);

    let mut explicit_complete = false;
    for (raw_key, value) in patch.iter() {
        let key = FieldKey::parse(raw_key);
        match classify_field(key.base) {
            FieldKind::Array => {
                let input = normalize(value);
                if let Some(target) = record.array_field_mut(key.base) {
                    array_op::apply(target, input, key.mode, name, key.base, log);
                }
            }
            FieldKind::Scalar => {
                apply_scalar(record, key, value, name, log, &mut explicit_complete);
            }
            FieldKind::Unknown => {
                log.warn(format!("'{name}': unknown field key '{raw_key}' ignored"));
            }
        }
    }

    // Explicit user intent wins over derivation.
    if !explicit_complete {
        record.complete_provider = !record.has_rules();
    }
}

fn apply_scalar(
    record: &mut Record,
    key: FieldKey,
    value: &PatchValue,
    name: &str,
    log: &mut RunLog,
    explicit_complete: &mut bool,
) {
    if key.mode == FieldMode::Delete {
        log.warn(format!(
            "'{name}': delete is not supported for scalar field '{base}'",
            base = key.base
        ));
        return;
    }
    match (key.base, value) {
        ("urlPattern", PatchValue::Text(text)) => record.url_pattern = text.clone(),
        ("completeProvider", PatchValue::Bool(flag)) => {
            record.complete_provider = *flag;
            *explicit_complete = true;
        }
        ("forceRedirection", PatchValue::Bool(flag)) => record.force_redirection = *flag,
        (base, _) => {
            log.warn(format!(
                "'{name}': unsupported value for scalar field '{base}', ignoring"
            ));
        }
    }
}
