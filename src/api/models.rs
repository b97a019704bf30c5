use serde::{Deserialize, Serialize};

use crate::utils::sanitize_dom_id;

/// One lyrics entry. `id` is the only correlation key between the data file
/// and the rendered section elements, so it must be unique and stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Song {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lyrics: String,
}

impl Song {
    /// DOM id of the section element for this song.
    pub fn section_dom_id(&self) -> String {
        sanitize_dom_id(&self.id)
    }

    /// DOM id of the collapsible lyrics container.
    pub fn lyrics_dom_id(&self) -> String {
        format!("lyrics-{}", sanitize_dom_id(&self.id))
    }

    /// DOM id of the description content container.
    pub fn description_dom_id(&self) -> String {
        format!("description-{}", sanitize_dom_id(&self.id))
    }
}

/// The full song list, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SongLibrary {
    pub songs: Vec<Song>,
}
