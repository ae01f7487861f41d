//! File boundary around the in-memory engine.
//!
//! The engine consumes two already-parsed structures and produces two output
//! structures plus the run log; this module is where those structures meet
//! the filesystem: the already-fetched upstream baseline (JSON), the
//! human-authored patch document (YAML), and the two published artifacts.

use crate::catalog::Catalog;
use crate::minify::MinifiedCatalog;
use crate::patch::PatchDocument;
use crate::runlog::RunLog;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads the baseline catalog. Any I/O or parse failure is fatal: the
/// engine never runs against a half-read baseline.
pub fn load_baseline(path: &Path) -> Result<Catalog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading baseline catalog {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing baseline catalog {}", path.display()))
}

/// Loads the patch document, tolerating a missing file: the run proceeds on
/// the empty document with a warning in the log. A present-but-malformed
/// document is fatal; applying a half-understood patch is worse than
/// stopping.
pub fn load_patch_document(path: &Path, log: &mut RunLog) -> Result<PatchDocument> {
    if !path.is_file() {
        log.warn(format!(
            "no patch document at {}; merging baseline unchanged",
            path.display()
        ));
        return Ok(PatchDocument::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading patch document {}", path.display()))?;
    // An empty file parses as YAML null, which reads as the empty document.
    let document: Option<PatchDocument> = serde_yaml_ng::from_str(&text)
        .with_context(|| format!("parsing patch document {}", path.display()))?;
    Ok(document.unwrap_or_default())
}

/// Writes the merged catalog pretty-printed, for human inspection.
pub fn write_merged(path: &Path, catalog: &Catalog) -> Result<()> {
    let text = serde_json::to_string_pretty(catalog).context("serializing merged catalog")?;
    fs::write(path, text).with_context(|| format!("writing merged catalog {}", path.display()))
}

/// Writes the minified catalog compact, the artifact downstream consumers
/// would digest-verify.
pub fn write_minified(path: &Path, minified: &MinifiedCatalog) -> Result<()> {
    let text = serde_json::to_string(minified).context("serializing minified catalog")?;
    fs::write(path, text).with_context(|| format!("writing minified catalog {}", path.display()))
}
