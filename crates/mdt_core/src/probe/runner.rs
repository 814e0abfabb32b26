//! Subprocess invocation of the probing tool.
//!
//! One probe invocation is a short-lived, complete-or-fail unit: run
//! mkvinfo, parse, classify, in strict sequence. The invocation blocks
//! until the tool exits; no state is shared across invocations.

use std::path::Path;
use std::process::Command;

use crate::config::ToolSettings;
use crate::models::MediaStreams;

use super::parser;
use super::tracks;
use super::types::{ProbeError, ProbeResult};

/// Run the probing tool against a file and capture its stdout.
///
/// A launch failure (tool missing, not executable) is
/// [`ProbeError::ToolUnavailable`]. A non-zero exit is the tool's way of
/// saying the file is not a Matroska container (mkvinfo exits 2 in that
/// case) and yields an empty string, as does genuinely empty output.
pub fn run_probe_tool(program: &str, path: &Path) -> ProbeResult<String> {
    tracing::debug!("Running: {} {}", program, path.display());

    let output = Command::new(program)
        .arg(path)
        .output()
        .map_err(|e| ProbeError::tool_unavailable(program, e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!(
            "{} exited with {}: {}",
            program,
            output.status,
            stderr.trim()
        );
        return Ok(String::new());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Probe a file and classify its audio/subtitle streams.
///
/// Empty probe output short-circuits to the "not a Matroska container"
/// result without attempting to parse. Parse-time structural errors are
/// fatal and propagate.
pub fn probe_file(path: &Path, tools: &ToolSettings) -> ProbeResult<MediaStreams> {
    if !path.exists() {
        return Err(ProbeError::FileNotFound(path.to_path_buf()));
    }

    let dump = run_probe_tool(&tools.mkvinfo, path)?;
    if dump.trim().is_empty() {
        tracing::info!(
            "{} produced no output for {}; not a Matroska container",
            tools.mkvinfo,
            path.display()
        );
        return Ok(MediaStreams::default());
    }

    let tree = parser::parse_dump(&dump)?;
    Ok(tracks::classify_tracks(&tree))
}
