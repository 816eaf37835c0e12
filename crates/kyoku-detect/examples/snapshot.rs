//! Run with: cargo run -p kyoku-detect --example snapshot
//!
//! Queries the configured player once and prints the result.

use kyoku_detect::AppConfig;

fn main() {
    let config = AppConfig::load().unwrap_or_default();

    match kyoku_detect::snapshot(&config) {
        Ok(now) if now.is_playing => {
            println!("Track:    {}", now.track_name);
            println!("Artist:   {}", now.artist_name);
            println!("Album:    {}", now.album_name);
            println!("Progress: {}%", now.progress);
            println!("Cover:    {} base64 chars", now.album_cover.len());
        }
        Ok(_) => println!("Nothing is playing."),
        Err(err) => eprintln!("query failed: {err}"),
    }
}
