//! Provider catalog wire model.
//!
//! Mirrors the upstream JSON document: a `providers` map keyed by provider
//! name, each record a URL-matching pattern plus rule arrays. The upstream
//! document arrives minified, so every field deserializes from its default
//! (a missing boolean reads as `false`, a missing array as empty). Keys live
//! in a `BTreeMap` so serialized output stays deterministic for diffing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rule array fields; these four drive the `completeProvider` derivation.
pub const RULE_FIELDS: [&str; 4] = ["rules", "referralMarketing", "rawRules", "redirections"];

/// Every array field on a record: the rule fields plus `exceptions`.
pub const ARRAY_FIELDS: [&str; 5] = [
    "rules",
    "referralMarketing",
    "rawRules",
    "redirections",
    "exceptions",
];

/// One named provider entry.
///
/// `completeProvider` marks a pass-through provider with no filtering rules;
/// it is normally derived from the rule arrays rather than user-set.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Record {
    pub url_pattern: String,
    pub complete_provider: bool,
    pub rules: Vec<String>,
    pub referral_marketing: Vec<String>,
    pub raw_rules: Vec<String>,
    pub exceptions: Vec<String>,
    pub redirections: Vec<String>,
    pub force_redirection: bool,
}

impl Record {
    /// Template for records created by a patch: pass-through until rules land.
    pub fn template() -> Self {
        Self {
            complete_provider: true,
            ..Self::default()
        }
    }

    /// Access to an array field by its wire name.
    pub fn array_field(&self, name: &str) -> Option<&Vec<String>> {
        match name {
            "rules" => Some(&self.rules),
            "referralMarketing" => Some(&self.referral_marketing),
            "rawRules" => Some(&self.raw_rules),
            "redirections" => Some(&self.redirections),
            "exceptions" => Some(&self.exceptions),
            _ => None,
        }
    }

    /// Mutable access to an array field by its wire name.
    pub fn array_field_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        match name {
            "rules" => Some(&mut self.rules),
            "referralMarketing" => Some(&mut self.referral_marketing),
            "rawRules" => Some(&mut self.raw_rules),
            "redirections" => Some(&mut self.redirections),
            "exceptions" => Some(&mut self.exceptions),
            _ => None,
        }
    }

    /// True when any rule array is non-empty; `exceptions` does not count.
    pub fn has_rules(&self) -> bool {
        RULE_FIELDS
            .iter()
            .any(|field| self.array_field(field).is_some_and(|values| !values.is_empty()))
    }
}

/// The full provider mapping, owned by the patch engine for one run.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default)]
    pub providers: BTreeMap<String, Record>,
}

/// Classification of a base field name on a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Array,
    Scalar,
    Unknown,
}

pub fn classify_field(name: &str) -> FieldKind {
    if ARRAY_FIELDS.contains(&name) {
        FieldKind::Array
    } else if matches!(name, "urlPattern" | "completeProvider" | "forceRedirection") {
        FieldKind::Scalar
    } else {
        FieldKind::Unknown
    }
}
