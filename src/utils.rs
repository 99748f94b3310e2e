use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

/// Fallback for mood/energy input that fails to parse or leaves [0, 1].
pub const TUNING_DEFAULT: f64 = 0.5;

/// Hard ceiling of the add-tracks endpoint; one request never carries more.
pub const PLAYLIST_ADD_LIMIT: usize = 100;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Coerces a raw mood/energy field to a value in [0, 1].
///
/// Anything that does not parse as a float in range comes back as
/// [`TUNING_DEFAULT`]; malformed input is a silent fallback, not an error.
pub fn parse_tuning(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if (0.0..=1.0).contains(&value) => value,
        _ => TUNING_DEFAULT,
    }
}

/// Derives the export file name from a playlist name.
///
/// Spaces become underscores; every other character passes through. The
/// extension is always `.csv`.
pub fn export_filename(playlist_name: &str) -> String {
    format!("{}.csv", playlist_name.replace(' ', "_"))
}

pub fn join_artists(artists: &[String]) -> String {
    artists.join(", ")
}

/// Builds the free-text query used to resolve a track to a video.
pub fn video_query(name: &str, artists: &[String]) -> String {
    let artists = join_artists(artists);
    if artists.is_empty() {
        format!("{} audio", name)
    } else {
        format!("{} {} audio", name, artists)
    }
}

/// Clamps a uri batch to the add-tracks ceiling.
pub fn cap_track_batch(uris: &[String]) -> &[String] {
    &uris[..uris.len().min(PLAYLIST_ADD_LIMIT)]
}
