//! Inspect a natives blob.
//!
//! Usage:
//!   natives-dump --blob natives_blob.bin
//!   natives-dump --blob natives_blob.bin --category core
//!   natives-dump --blob natives_blob.bin --category experimental --script harmony
//!
//! Without `--script`, prints a JSON array of catalog summaries (one per
//! installed category, or just the selected one). With `--script`, writes
//! that script's raw source to stdout.

use anyhow::{Context, Result, bail};
use clap::Parser;
use natives_store::{CatalogSummary, NativeCategory, NativesRegistry, try_install_blob};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "natives-dump")]
#[command(about = "Summarize a natives blob or print one script's source")]
struct Cli {
    /// Natives blob to decode.
    #[arg(long)]
    blob: PathBuf,
    /// Restrict output to one category (core, experimental).
    #[arg(long)]
    category: Option<NativeCategory>,
    /// Print the raw source of the named script; requires --category.
    #[arg(long, requires = "category")]
    script: Option<String>,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let bytes = fs::read(&cli.blob).with_context(|| format!("reading {}", cli.blob.display()))?;

    let registry = NativesRegistry::new();
    try_install_blob(&registry, &bytes)
        .with_context(|| format!("decoding natives blob {}", cli.blob.display()))?;

    if let Some(name) = cli.script.as_deref() {
        let category = cli.category.unwrap_or(NativeCategory::Core);
        let catalog = registry.try_get(category)?;
        let Some(index) = catalog.position(name.as_bytes()) else {
            bail!("no script named '{name}' in the {category} catalog");
        };
        let mut stdout = io::stdout().lock();
        stdout.write_all(catalog.source(index))?;
        stdout.flush()?;
        return Ok(());
    }

    let summaries = match cli.category {
        Some(category) => vec![CatalogSummary::new(category, registry.try_get(category)?)],
        None => registry
            .installed()
            .map(|(category, catalog)| CatalogSummary::new(category, catalog))
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
