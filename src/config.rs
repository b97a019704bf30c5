//! Page configuration.
//!
//! The original page shipped as three near-identical variants (navigation
//! on/off, different collapsed-hint text); one implementation parameterized
//! by `PageConfig` subsumes them.

use crate::state::ToggleSource;

/// Glyph family used by a lyrics-toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    MusicNote,
    Chevron,
}

impl ToggleIcon {
    /// Icon name for the `Icon` component. The music-note glyph does not
    /// distinguish open from closed; the chevron flips direction.
    pub fn name(self, shown: bool) -> &'static str {
        match self {
            Self::MusicNote => "music",
            Self::Chevron => {
                if shown {
                    "chevron-up"
                } else {
                    "chevron-down"
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    /// Render the in-page navigation list above the song sections.
    pub navigation: bool,
    /// Collapsed description hint carries an ordinal ("First song") rather
    /// than bare dots.
    pub ordinal_hints: bool,
    /// Glyph for the per-song toggle button.
    pub song_toggle_icon: ToggleIcon,
    /// Glyph applied by the bulk show/hide operations.
    pub bulk_toggle_icon: ToggleIcon,
}

impl Default for PageConfig {
    // Defaults match the observed page: no navigation, ordinal hints, a
    // music note on individual toggles and a chevron after bulk toggles.
    fn default() -> Self {
        Self {
            navigation: false,
            ordinal_hints: true,
            song_toggle_icon: ToggleIcon::MusicNote,
            bulk_toggle_icon: ToggleIcon::Chevron,
        }
    }
}

impl PageConfig {
    /// Icon name for a toggle button, honoring whichever path last moved
    /// the panel.
    pub fn toggle_icon_name(&self, source: ToggleSource, shown: bool) -> &'static str {
        let icon = match source {
            ToggleSource::Individual => self.song_toggle_icon,
            ToggleSource::Bulk => self.bulk_toggle_icon,
        };
        icon.name(shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn music_note_ignores_openness() {
        assert_eq!(ToggleIcon::MusicNote.name(true), "music");
        assert_eq!(ToggleIcon::MusicNote.name(false), "music");
    }

    #[test]
    fn chevron_flips_with_openness() {
        assert_eq!(ToggleIcon::Chevron.name(true), "chevron-up");
        assert_eq!(ToggleIcon::Chevron.name(false), "chevron-down");
    }

    #[test]
    fn icon_follows_the_last_toggle_source() {
        let config = PageConfig::default();
        assert_eq!(
            config.toggle_icon_name(ToggleSource::Individual, true),
            "music"
        );
        assert_eq!(
            config.toggle_icon_name(ToggleSource::Bulk, true),
            "chevron-up"
        );
        assert_eq!(
            config.toggle_icon_name(ToggleSource::Bulk, false),
            "chevron-down"
        );
    }
}
