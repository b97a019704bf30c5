//! Loads the song library from the bundled JSON document.
//!
//! This is the only fallible path in the app: a network or parse failure is
//! fatal to rendering and surfaces as a single warning panel upstream.

#[cfg(target_arch = "wasm32")]
use once_cell::sync::Lazy;
use thiserror::Error;

use super::SongLibrary;

/// Relative path the browser fetches the song data from.
#[cfg(target_arch = "wasm32")]
const SONG_DATA_URL: &str = "/assets/lyrics-data.json";

/// Where desktop builds find the same document on disk.
#[cfg(not(target_arch = "wasm32"))]
const SONG_DATA_PATH: &str = "assets/lyrics-data.json";

#[cfg(target_arch = "wasm32")]
static SONG_HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// The single failure taxonomy for loading: the caller does not care whether
/// the transport or the payload was at fault, only that rendering cannot
/// proceed.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[cfg(target_arch = "wasm32")]
    #[error("failed to fetch song data: {0}")]
    Network(#[from] reqwest::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to read song data: {0}")]
    Io(#[from] std::io::Error),
    #[error("song data is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses the raw payload. The document must be an object with an
/// array-valued `songs` key; anything else is a parse error.
pub fn parse_song_library(text: &str) -> Result<SongLibrary, DataLoadError> {
    Ok(serde_json::from_str(text)?)
}

/// Fetches and parses the song library. Called exactly once at startup; the
/// result is never refreshed.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_song_library() -> Result<SongLibrary, DataLoadError> {
    let text = SONG_HTTP_CLIENT
        .get(SONG_DATA_URL)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    parse_song_library(&text)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_song_library() -> Result<SongLibrary, DataLoadError> {
    let text = tokio::fs::read_to_string(SONG_DATA_PATH).await?;
    parse_song_library(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_wellformed_document() {
        let library = parse_song_library(
            r#"{ "songs": [ { "id": "a", "title": "A", "description": "hi", "lyrics": "la" } ] }"#,
        )
        .unwrap();
        assert_eq!(library.songs.len(), 1);
        assert_eq!(library.songs[0].id, "a");
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let err = parse_song_library("not json at all").unwrap_err();
        assert!(matches!(err, DataLoadError::Parse(_)));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let err = parse_song_library(r#"{ "songs": "la" }"#).unwrap_err();
        assert!(matches!(err, DataLoadError::Parse(_)));
    }

    #[test]
    fn empty_song_list_is_valid() {
        let library = parse_song_library(r#"{ "songs": [] }"#).unwrap();
        assert!(library.songs.is_empty());
    }
}
