//! AppleScript bodies sent to the automation bridge.

/// Separator joining the info script's fields.
///
/// A literal list or a comma-joined string would split apart on
/// punctuation that legitimately appears in track titles; `|||` cannot.
pub const FIELD_SEPARATOR: &str = "|||";

/// Script returning `track|||artist|||album|||progress` for a playing
/// track, or an empty string otherwise. Progress is the playback
/// position as a percentage of the track duration.
pub fn info_script(application: &str) -> String {
    format!(
        r#"tell application "{application}"
	if player state is playing then
		set currentTrack to current track
		set trackProgress to (player position / (duration of currentTrack)) * 100
		return (name of currentTrack) & "{sep}" & (artist of currentTrack) & "{sep}" & (album of currentTrack) & "{sep}" & trackProgress
	else
		return ""
	end if
end tell"#,
        sep = FIELD_SEPARATOR,
    )
}

/// Script exporting the current track's cover art as base64 text.
///
/// The automation bridge has no way to hand binary data back in-memory,
/// so the script writes the artwork to a uniquely named file under the
/// temporary-items directory, base64-encodes it with the shell, and
/// removes the file again on both the success and the error path. A
/// stopped player or a track without artwork yields no output.
pub fn artwork_script(application: &str) -> String {
    format!(
        r#"tell application "{application}"
	try
		if player state is not stopped then
			set currentTrack to current track
			tell artwork 1 of currentTrack
				if format is JPEG picture then
					set coverExt to ".jpg"
				else
					set coverExt to ".png"
				end if
			end tell
			set coverPath to (POSIX path of (path to temporary items)) & "kyoku-cover-" & (random number from 100000 to 999999) & coverExt
			set rawData to raw data of artwork 1 of currentTrack
			try
				set fileRef to (open for access POSIX file coverPath with write permission)
				write rawData to fileRef starting at 0
				close access fileRef
				set coverData to (do shell script "base64 < " & quoted form of coverPath)
				do shell script "rm -f " & quoted form of coverPath
				return coverData
			on error
				try
					close access fileRef
				end try
				try
					do shell script "rm -f " & quoted form of coverPath
				end try
				return ""
			end try
		end if
	on error
		return ""
	end try
end tell"#
    )
}
