#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

/// Path to a helper binary built by Cargo for this test run.
pub fn helper_binary(name: &str) -> PathBuf {
    let path = match name {
        "skill-report" => env!("CARGO_BIN_EXE_skill-report"),
        "skill-list" => env!("CARGO_BIN_EXE_skill-list"),
        other => panic!("unknown helper binary {other}"),
    };
    PathBuf::from(path)
}

/// Run `cmd` to completion and fail unless it exits successfully.
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

/// Run `cmd` with `stdin` piped in, returning the output whatever the status.
pub fn run_with_stdin(mut cmd: Command, stdin: &str) -> Result<Output> {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd
        .spawn()
        .with_context(|| format!("failed to spawn command: {:?}", cmd))?;
    child
        .stdin
        .take()
        .context("child stdin unavailable")?
        .write_all(stdin.as_bytes())
        .context("writing child stdin")?;
    child.wait_with_output().context("waiting for child")
}

/// Write `contents` to a fresh temporary file.
pub fn input_file(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate input file")?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}
