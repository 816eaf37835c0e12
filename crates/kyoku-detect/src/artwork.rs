use tracing::{debug, warn};

use crate::osa::ScriptHost;
use crate::script;

/// Fetch the current track's cover art as base64 text.
///
/// Artwork is optional data: any failure degrades to an empty string so
/// the caller's snapshot still succeeds.
pub fn fetch_artwork(host: &impl ScriptHost, application: &str) -> String {
    match host.run(&script::artwork_script(application)) {
        Ok(output) => {
            let encoded = output.trim().to_string();
            if encoded.is_empty() {
                debug!(player = %application, "no artwork reported for the current track");
            }
            encoded
        }
        Err(err) => {
            warn!(error = %err, "artwork query failed, leaving cover empty");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DetectError;

    struct CannedHost(Result<&'static str, ()>);

    impl ScriptHost for CannedHost {
        fn run(&self, _script: &str) -> Result<String, DetectError> {
            self.0.map(str::to_string).map_err(|()| {
                DetectError::Spawn(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "osascript not found",
                ))
            })
        }
    }

    #[test]
    fn test_output_is_trimmed() {
        let cover = fetch_artwork(&CannedHost(Ok("  QkFTRTY0\n")), "Music");
        assert_eq!(cover, "QkFTRTY0");
    }

    #[test]
    fn test_invoker_error_becomes_empty() {
        let cover = fetch_artwork(&CannedHost(Err(())), "Music");
        assert_eq!(cover, "");
    }

    #[test]
    fn test_no_artwork_stays_empty() {
        let cover = fetch_artwork(&CannedHost(Ok("")), "Music");
        assert_eq!(cover, "");
    }
}
