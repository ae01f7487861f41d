//! Three-phase catalog patcher.
//!
//! Deletions run first, then additions, then modifications, and each phase
//! observes the effects of the previous ones on the same name: a provider
//! listed under both `del-providers` and `add-providers` ends up added.
//! The catalog is threaded through explicitly and mutated in place; there
//! is no partial visibility, callers only see the fully merged result.

use crate::catalog::Catalog;
use crate::patch::PatchDocument;
use crate::patch::normalize::normalize;
use crate::patch::upsert::{PatchOrigin, upsert_record};
use crate::runlog::RunLog;

/// Applies one patch document to the catalog.
pub fn apply_patches(catalog: &mut Catalog, document: &PatchDocument, log: &mut RunLog) {
    for name in normalize(&document.del_providers) {
        if catalog.providers.remove(&name).is_some() {
            log.info(format!("[Delete] {name}"));
        } else {
            // Removing a whole unknown record likely indicates an authoring
            // mistake, unlike deleting an absent array element.
            log.warn(format!("delete failed: provider '{name}' not found in baseline"));
        }
    }

    for (name, patch) in document.add_providers.iter() {
        upsert_record(catalog, name, patch, PatchOrigin::Add, log);
    }

    for (name, patch) in document.modify_providers.iter() {
        upsert_record(catalog, name, patch, PatchOrigin::Modify, log);
    }
}
