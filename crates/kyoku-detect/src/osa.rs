use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::DetectError;

/// Seam over the host automation bridge.
///
/// The production implementation shells out to `osascript`; tests
/// substitute a canned host so the snapshot pipeline runs without
/// spawning processes.
pub trait ScriptHost {
    /// Run an AppleScript body and return its standard output.
    fn run(&self, script: &str) -> Result<String, DetectError>;
}

/// Runs scripts through `osascript -e`, one subprocess per call.
#[derive(Debug, Default)]
pub struct Osascript;

impl ScriptHost for Osascript {
    fn run(&self, script: &str) -> Result<String, DetectError> {
        let output = Command::new("osascript")
            .arg("-e")
            .arg(script)
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            return Err(DetectError::Script {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        debug!(bytes = stdout.len(), "osascript completed");
        Ok(stdout)
    }
}
