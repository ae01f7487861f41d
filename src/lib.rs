//! Provider-catalog patch engine.
//!
//! Merges an upstream catalog of URL-matching provider records with a
//! locally authored patch document (deletions, additions, modifications in
//! that fixed order), then projects the merged result into the compact
//! publishable form. The engine runs entirely on in-memory structures and
//! records actions and authoring anomalies in a run log instead of failing;
//! `sources` holds the file boundary and the `rulemerge` binary the CLI.

pub mod catalog;
pub mod minify;
pub mod patch;
pub mod runlog;
pub mod sources;

pub use catalog::{ARRAY_FIELDS, Catalog, FieldKind, RULE_FIELDS, Record, classify_field};
pub use minify::{MinifiedCatalog, MinifiedRecord, minify};
pub use patch::array_op::DELETE_ALL_SENTINEL;
pub use patch::engine::apply_patches;
pub use patch::normalize::normalize;
pub use patch::upsert::{PatchOrigin, upsert_record};
pub use patch::{FieldKey, FieldMode, OrderedMap, PatchDocument, PatchObject, PatchValue};
pub use runlog::{Level, LogEvent, RunLog};
