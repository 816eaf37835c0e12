pub mod artwork;
pub mod config;
pub mod error;
pub mod osa;
pub mod parse;
pub mod script;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use config::AppConfig;
pub use error::DetectError;
pub use osa::{Osascript, ScriptHost};
pub use parse::TrackFields;

/// Snapshot of what the player is doing at query time.
///
/// Built fresh on every invocation. When nothing is playing, every
/// field other than `is_playing` is the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NowPlaying {
    pub is_playing: bool,
    pub track_name: String,
    pub artist_name: String,
    pub album_name: String,
    /// Base64-encoded cover image (JPEG or PNG), empty when unavailable.
    pub album_cover: String,
    /// Playback completion percentage with two decimals, e.g. `"42.50"`.
    pub progress: String,
}

impl NowPlaying {
    /// The "nothing is playing" record.
    pub fn stopped() -> Self {
        Self {
            is_playing: false,
            track_name: String::new(),
            artist_name: String::new(),
            album_name: String::new(),
            album_cover: String::new(),
            progress: String::new(),
        }
    }

    /// Build a playing record from parsed fields and a (possibly empty)
    /// base64 cover.
    pub fn playing(fields: TrackFields, album_cover: String) -> Self {
        Self {
            is_playing: true,
            track_name: fields.track,
            artist_name: fields.artist,
            album_name: fields.album,
            album_cover,
            progress: format!("{:.2}", fields.progress),
        }
    }
}

/// Query the configured player once, using the system `osascript` bridge.
pub fn snapshot(config: &AppConfig) -> Result<NowPlaying, DetectError> {
    snapshot_with_host(&Osascript, config)
}

/// Query the player once through a custom script host.
///
/// The info script is mandatory: any invoker failure there aborts the
/// query. The artwork script is best-effort and never does.
pub fn snapshot_with_host(
    host: &impl ScriptHost,
    config: &AppConfig,
) -> Result<NowPlaying, DetectError> {
    let application = &config.player.application;
    let raw = host.run(&script::info_script(application))?;

    let Some(fields) = parse::parse_track_info(&raw) else {
        debug!(player = %application, "nothing is playing");
        return Ok(NowPlaying::stopped());
    };

    let cover = if config.artwork.enabled {
        artwork::fetch_artwork(host, application)
    } else {
        String::new()
    };

    Ok(NowPlaying::playing(fields, cover))
}
