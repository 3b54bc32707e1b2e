#![cfg(unix)]

// Smoke tests for the helper binaries: pack a manifest from disk, then read
// the resulting blob back through natives-dump.
mod support;

use anyhow::Result;
use serde_json::{Value, json};
use std::fs;
use std::process::Command;
use support::{helper_binary, reference_blob, run_command, write_file};
use tempfile::TempDir;

fn write_manifest(dir: &TempDir) -> Result<std::path::PathBuf> {
    write_file(&dir.path().join("src/debug.js"), "console.log(1)")?;
    let manifest_path = dir.path().join("natives.json");
    write_file(
        &manifest_path,
        serde_json::to_vec(&json!({
            "schema_version": "natives_manifest_v1",
            "sections": {
                "core": {
                    "debugger": [{"name": "dbg1", "path": "src/debug.js"}],
                    "library": [
                        {"name": "lib1", "source": "function f(){}"},
                        {"name": "lib2", "source": "var x=1;"}
                    ]
                },
                "experimental": {
                    "debugger": [{"name": "dbg1", "source": "console.log(1)"}],
                    "library": [
                        {"name": "lib1", "source": "function f(){}"},
                        {"name": "lib2", "source": "var x=1;"}
                    ]
                }
            }
        }))?,
    )?;
    Ok(manifest_path)
}

#[test]
fn pack_then_dump_round_trips() -> Result<()> {
    let dir = TempDir::new()?;
    let manifest_path = write_manifest(&dir)?;
    let blob_path = dir.path().join("natives_blob.bin");

    let mut pack = Command::new(helper_binary("natives-pack"));
    pack.arg("--manifest")
        .arg(&manifest_path)
        .arg("--out")
        .arg(&blob_path);
    run_command(pack)?;
    assert_eq!(fs::read(&blob_path)?, reference_blob());

    let mut dump = Command::new(helper_binary("natives-dump"));
    dump.arg("--blob").arg(&blob_path);
    let output = run_command(dump)?;
    let summaries: Value = serde_json::from_slice(&output.stdout)?;
    let summaries = summaries.as_array().expect("dump prints an array");
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0]["category"], "core");
    assert_eq!(summaries[0]["debugger_count"], 1);
    assert_eq!(summaries[0]["library_count"], 2);
    assert_eq!(summaries[0]["entries"][2]["name"], "lib2");
    assert_eq!(summaries[1]["category"], "experimental");

    let mut source = Command::new(helper_binary("natives-dump"));
    source
        .arg("--blob")
        .arg(&blob_path)
        .arg("--category")
        .arg("core")
        .arg("--script")
        .arg("lib2");
    let output = run_command(source)?;
    assert_eq!(output.stdout, b"var x=1;");
    Ok(())
}

#[test]
fn dump_rejects_trailing_bytes() -> Result<()> {
    let dir = TempDir::new()?;
    let blob_path = dir.path().join("padded.bin");
    let mut blob = reference_blob();
    blob.push(0);
    write_file(&blob_path, &blob)?;

    let output = Command::new(helper_binary("natives-dump"))
        .arg("--blob")
        .arg(&blob_path)
        .output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("trailing bytes"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn pack_rejects_duplicate_names() -> Result<()> {
    let dir = TempDir::new()?;
    let manifest_path = dir.path().join("natives.json");
    write_file(
        &manifest_path,
        serde_json::to_vec(&json!({
            "schema_version": "natives_manifest_v1",
            "sections": {
                "core": {"library": [
                    {"name": "dup", "source": "1"},
                    {"name": "dup", "source": "2"}
                ]},
                "experimental": {}
            }
        }))?,
    )?;
    let out = dir.path().join("out.bin");

    let output = Command::new(helper_binary("natives-pack"))
        .arg("--manifest")
        .arg(&manifest_path)
        .arg("--out")
        .arg(&out)
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("duplicate script name 'dup'"));
    assert!(!out.exists());
    Ok(())
}
