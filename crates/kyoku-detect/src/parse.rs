use crate::script::FIELD_SEPARATOR;

/// Fields extracted from a well-formed info-script reply.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackFields {
    pub track: String,
    pub artist: String,
    pub album: String,
    /// Playback completion, 0–100.
    pub progress: f64,
}

/// Parse the info script's raw reply.
///
/// Returns `None` when nothing is playing: the script replies with an
/// empty string in that state, and a truncated or garbled reply is
/// treated the same way rather than as an error.
pub fn parse_track_info(raw: &str) -> Option<TrackFields> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parts: Vec<&str> = raw.split(FIELD_SEPARATOR).collect();
    if parts.len() < 4 || parts[0].trim().is_empty() {
        return None;
    }

    // AppleScript renders the percentage as decimal text; anything that
    // fails to parse (or parses to NaN/inf) falls back to zero.
    let progress = parts[3]
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .unwrap_or(0.0);

    Some(TrackFields {
        track: parts[0].trim().to_string(),
        artist: parts[1].trim().to_string(),
        album: parts[2].trim().to_string(),
        progress,
    })
}
