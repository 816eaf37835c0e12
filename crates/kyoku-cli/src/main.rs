use std::process::ExitCode;

use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use kyoku_detect::AppConfig;

fn main() -> ExitCode {
    // Stdout carries the JSON payload, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kyoku=info,kyoku_detect=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load().unwrap_or_else(|err| {
        warn!(error = %err, "failed to load config, using built-in defaults");
        AppConfig::default()
    });

    let now_playing = match kyoku_detect::snapshot(&config) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            error!(error = %err, "now-playing query failed");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string(&now_playing) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "failed to encode snapshot as JSON");
            ExitCode::FAILURE
        }
    }
}
