//! Compact projection of a merged catalog.
//!
//! The minified form is the machine-consumed artifact: every default-valued
//! boolean and empty array is omitted, leaving only the information a
//! consumer cannot reconstruct. Consumers read a missing
//! `completeProvider`/`forceRedirection` as `false` and a missing array
//! field as empty.

use crate::catalog::{Catalog, Record};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct MinifiedCatalog {
    pub providers: BTreeMap<String, MinifiedRecord>,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MinifiedRecord {
    pub url_pattern: String,
    #[serde(skip_serializing_if = "is_false")]
    pub complete_provider: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub force_redirection: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub referral_marketing: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub raw_rules: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub redirections: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exceptions: Vec<String>,
}

/// Projects the merged catalog into its minified form. Pure; the merged
/// catalog is left untouched.
pub fn minify(catalog: &Catalog) -> MinifiedCatalog {
    MinifiedCatalog {
        providers: catalog
            .providers
            .iter()
            .map(|(name, record)| (name.clone(), minify_record(record)))
            .collect(),
    }
}

fn minify_record(record: &Record) -> MinifiedRecord {
    MinifiedRecord {
        url_pattern: record.url_pattern.clone(),
        complete_provider: record.complete_provider,
        force_redirection: record.force_redirection,
        rules: record.rules.clone(),
        referral_marketing: record.referral_marketing.clone(),
        raw_rules: record.raw_rules.clone(),
        redirections: record.redirections.clone(),
        exceptions: record.exceptions.clone(),
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
