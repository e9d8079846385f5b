//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing ad text fixtures and running the adtext
//! binary used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Writes file under directory, creating parent directories as needed.
///
/// # Returns
///
/// Full path of the written file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Runs the adtext binary with arguments and optional stdin.
///
/// # Arguments
///
/// * `args`: Command line arguments
/// * `stdin`: Text piped to the process, closed immediately when None
///
/// # Errors
///
/// Returns error if the process cannot be spawned or awaited
pub fn run_adtext(args: &[&str], stdin: Option<&str>) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_adtext"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut pipe) = child.stdin.take()
        && let Some(text) = stdin
    {
        pipe.write_all(text.as_bytes())?;
    }

    Ok(child.wait_with_output()?)
}
