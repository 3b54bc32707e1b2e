#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use natives_store::{BlobWriter, SectionSources};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Core section of the reference blob: one debugger script, two library scripts.
pub fn reference_section() -> SectionSources {
    let mut section = SectionSources::default();
    section.push_debugger("dbg1", "console.log(1)");
    section.push_library("lib1", "function f(){}");
    section.push_library("lib2", "var x=1;");
    section
}

/// The reference section encoded twice, as Core then Experimental.
pub fn reference_blob() -> Vec<u8> {
    encode_blob(&reference_section(), &reference_section())
}

pub fn encode_blob(core: &SectionSources, experimental: &SectionSources) -> Vec<u8> {
    let mut writer = BlobWriter::new();
    writer.write_section(core).expect("core section encodes");
    writer
        .write_section(experimental)
        .expect("experimental section encodes");
    writer.finish()
}

pub fn helper_binary(name: &str) -> PathBuf {
    let path = match name {
        "natives-pack" => env!("CARGO_BIN_EXE_natives-pack"),
        "natives-dump" => env!("CARGO_BIN_EXE_natives-dump"),
        other => panic!("unknown helper binary {other}"),
    };
    PathBuf::from(path)
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}
