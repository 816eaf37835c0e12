use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectError {
    /// `osascript` could not be spawned at all.
    #[error("failed to run osascript: {0}")]
    Spawn(#[from] std::io::Error),

    /// The script ran but exited non-zero (compile error, missing app).
    #[error("osascript failed ({status}): {stderr}")]
    Script { status: ExitStatus, stderr: String },

    /// The script replied with bytes that are not valid UTF-8.
    #[error("script output was not valid UTF-8: {0}")]
    Output(#[from] std::string::FromUtf8Error),

    #[error("config error: {0}")]
    Config(String),
}
