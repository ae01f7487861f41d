//! Merge an upstream provider catalog with local patch declarations.
//!
//! Usage:
//!   rulemerge --baseline rules/upstream.json --patches custom_rules.yaml \
//!     --merged-out rules/merged.json --minified-out rules/rules.min.json
//!
//! The run log is echoed to stderr once the merge completes; warnings never
//! fail the run, only unreadable inputs or unwritable outputs do.

use anyhow::Result;
use clap::Parser;
use rulemerge::runlog::{Level, RunLog};
use rulemerge::{apply_patches, minify, sources};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rulemerge")]
#[command(about = "Merge an upstream provider catalog with local patch declarations")]
struct Cli {
    /// Already-fetched upstream catalog (JSON).
    #[arg(long)]
    baseline: PathBuf,
    /// Patch document (YAML); a missing file merges the baseline unchanged.
    #[arg(long)]
    patches: PathBuf,
    /// Where to write the pretty-printed merged catalog.
    #[arg(long)]
    merged_out: PathBuf,
    /// Where to write the compact minified catalog.
    #[arg(long)]
    minified_out: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut log = RunLog::new();

    let mut catalog = sources::load_baseline(&cli.baseline)?;
    let document = sources::load_patch_document(&cli.patches, &mut log)?;

    apply_patches(&mut catalog, &document, &mut log);
    let minified = minify(&catalog);

    // Outputs land only after the merge fully completed; a failed run leaves
    // the previous artifacts untouched.
    sources::write_merged(&cli.merged_out, &catalog)?;
    sources::write_minified(&cli.minified_out, &minified)?;

    for event in log.events() {
        match event.level {
            Level::Warn => eprintln!("[WARN] {}", event.message),
            Level::Info => eprintln!("{}", event.message),
        }
    }
    let warnings = log.warnings().count();
    if warnings > 0 {
        eprintln!("{warnings} warning(s) during merge");
    }
    Ok(())
}
