#![allow(dead_code)]

// Shared fixtures for the integration tests.

use anyhow::Result;
use rulemerge::{Catalog, PatchDocument};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

/// A small but representative baseline: one pass-through provider and one
/// provider with rules in every shape the minifier cares about.
pub fn baseline_json() -> Value {
    json!({
        "providers": {
            "example.com": {
                "urlPattern": "^https?://(?:[a-z0-9-]+\\.)*?example\\.com",
                "completeProvider": true
            },
            "tracker.net": {
                "urlPattern": "^https?://(?:[a-z0-9-]+\\.)*?tracker\\.net",
                "rules": ["ref", "utm_campaign", "utm_source"],
                "exceptions": ["^https?://keep\\.tracker\\.net"],
                "redirections": ["dest=(.*)"],
                "forceRedirection": true
            }
        }
    })
}

pub fn baseline_catalog() -> Catalog {
    serde_json::from_value(baseline_json()).expect("fixture baseline parses")
}

pub fn patch_document(yaml: &str) -> PatchDocument {
    serde_yaml_ng::from_str(yaml).expect("fixture document parses")
}

/// Writes the fixture baseline and the given patch YAML under `dir`,
/// returning (baseline, patches) paths.
pub fn write_fixtures(dir: &Path, patch_yaml: &str) -> Result<(PathBuf, PathBuf)> {
    let baseline = dir.join("upstream.json");
    fs::write(&baseline, serde_json::to_string_pretty(&baseline_json())?)?;
    let patches = dir.join("custom_rules.yaml");
    fs::write(&patches, patch_yaml)?;
    Ok((baseline, patches))
}
