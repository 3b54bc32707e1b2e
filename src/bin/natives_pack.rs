//! Build a natives blob from a pack manifest.
//!
//! Usage:
//!   natives-pack --manifest natives.json --out natives_blob.bin
//!
//! The manifest is validated against the bundled schema, every script is read
//! relative to the manifest's directory, and the blob is written in one go.
//! The result is decoded again before it is written so a bad blob never
//! reaches disk.

use anyhow::{Context, Result};
use clap::Parser;
use natives_store::{NativesBlob, pack_manifest};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "natives-pack")]
#[command(about = "Pack builtin script sources into a natives blob")]
struct Cli {
    /// Pack manifest (natives_manifest_v1 JSON).
    #[arg(long)]
    manifest: PathBuf,
    /// Output path for the blob.
    #[arg(long)]
    out: PathBuf,
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
    let blob = pack_manifest(&cli.manifest)?;

    let [core, experimental] = NativesBlob::new(&blob)
        .and_then(|blob| blob.decode())
        .context("packed blob does not decode")?;
    log::info!(
        "packed {} core and {} experimental natives ({} bytes)",
        core.entry_count(),
        experimental.entry_count(),
        blob.len()
    );

    fs::write(&cli.out, &blob).with_context(|| format!("writing {}", cli.out.display()))?;
    Ok(())
}
