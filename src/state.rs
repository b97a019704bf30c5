//! Explicit per-song panel state.
//!
//! Every song owns two independent two-state panels (lyrics, description).
//! The lyrics panel passes through short-lived transition phases so the view
//! can drive the fade/slide styles; the description panel carries a typing
//! generation counter so at most one reveal animation is live per song.

use std::collections::HashMap;

use dioxus::prelude::*;

/// Duration of the lyrics fade/slide transition.
pub const LYRICS_TRANSITION_MS: u32 = 300;
/// Delay before the open transition styles are applied, so the renderer
/// observes the panel in its start state first.
pub const LYRICS_ENTER_DEFER_MS: u32 = 10;
/// Delay between typed characters of the description reveal.
pub const TYPEWRITER_INTERVAL_MS: u32 = 30;

/// Lifecycle of a lyrics panel. `Entering` and `Leaving` exist only for the
/// duration of the 300ms transition; the bulk toggle skips them entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LyricsPhase {
    #[default]
    Hidden,
    Entering,
    Open,
    Leaving,
}

impl LyricsPhase {
    /// Whether the panel occupies layout. The toggle label reads "hide"
    /// for the whole shown range, including the close transition.
    pub fn is_shown(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Which path last moved a lyrics panel. The individual and bulk toggles
/// historically used different glyphs; the view maps this through the icon
/// policy in `PageConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleSource {
    #[default]
    Individual,
    Bulk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    pub lyrics: LyricsPhase,
    pub description_open: bool,
    pub last_toggle: ToggleSource,
    typing_generation: u64,
}

/// Outcome of an individual lyrics toggle, telling the caller which timer
/// to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LyricsToggle {
    Opening,
    Closing,
}

/// Outcome of a description toggle. `Opened` carries the generation the
/// new reveal animation must present on every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionToggle {
    Opened { generation: u64 },
    Closed,
}

/// The page-wide panel map, keyed by song id. Songs are installed once
/// after the library loads and never removed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    panels: HashMap<String, PanelState>,
}

impl PageState {
    pub fn install_songs<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for id in ids {
            self.panels.entry(id.into()).or_default();
        }
    }

    pub fn song_count(&self) -> usize {
        self.panels.len()
    }

    /// Panel record for a song; unknown ids read as a closed panel.
    pub fn panel(&self, id: &str) -> PanelState {
        self.panels.get(id).copied().unwrap_or_default()
    }

    /// Individual lyrics toggle. A hidden panel starts opening; a panel in
    /// any shown phase starts (or restarts) closing. Unknown ids are
    /// ignored.
    pub fn toggle_lyrics(&mut self, id: &str) -> Option<LyricsToggle> {
        let panel = self.panels.get_mut(id)?;
        panel.last_toggle = ToggleSource::Individual;
        if panel.lyrics == LyricsPhase::Hidden {
            panel.lyrics = LyricsPhase::Entering;
            Some(LyricsToggle::Opening)
        } else {
            panel.lyrics = LyricsPhase::Leaving;
            Some(LyricsToggle::Closing)
        }
    }

    /// Applies the open transition one tick after `toggle_lyrics` returned
    /// `Opening`. A no-op if the panel was toggled again in the meantime.
    pub fn settle_lyrics_open(&mut self, id: &str) {
        if let Some(panel) = self.panels.get_mut(id) {
            if panel.lyrics == LyricsPhase::Entering {
                panel.lyrics = LyricsPhase::Open;
            }
        }
    }

    /// Hides the panel once the close transition has run. Stale timers
    /// (the panel was reopened meanwhile) are a no-op.
    pub fn finish_lyrics_close(&mut self, id: &str) {
        if let Some(panel) = self.panels.get_mut(id) {
            if panel.lyrics == LyricsPhase::Leaving {
                panel.lyrics = LyricsPhase::Hidden;
            }
        }
    }

    /// Bulk show/hide: every panel jumps to its final phase with no
    /// transition.
    pub fn set_all_lyrics(&mut self, open: bool) {
        for panel in self.panels.values_mut() {
            panel.lyrics = if open {
                LyricsPhase::Open
            } else {
                LyricsPhase::Hidden
            };
            panel.last_toggle = ToggleSource::Bulk;
        }
    }

    /// Description toggle. Opening hands out a fresh generation for the
    /// reveal animation; closing bumps the generation so in-flight steps
    /// of a previous reveal stop appending.
    pub fn toggle_description(&mut self, id: &str) -> Option<DescriptionToggle> {
        let panel = self.panels.get_mut(id)?;
        panel.typing_generation += 1;
        if panel.description_open {
            panel.description_open = false;
            Some(DescriptionToggle::Closed)
        } else {
            panel.description_open = true;
            Some(DescriptionToggle::Opened {
                generation: panel.typing_generation,
            })
        }
    }

    /// Whether a reveal step holding `generation` is still the active one.
    pub fn typing_is_current(&self, id: &str, generation: u64) -> bool {
        self.panels
            .get(id)
            .map(|panel| panel.description_open && panel.typing_generation == generation)
            .unwrap_or(false)
    }
}

/// Shared handle over the page state, passed to components via context.
#[derive(Clone, PartialEq)]
pub struct PageController {
    state: Signal<PageState>,
}

impl PageController {
    pub fn new(state: Signal<PageState>) -> Self {
        Self { state }
    }

    pub fn install_songs<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.state.with_mut(|state| state.install_songs(ids));
    }

    pub fn panel(&self, id: &str) -> PanelState {
        self.state.read().panel(id)
    }

    pub fn toggle_lyrics(&mut self, id: &str) -> Option<LyricsToggle> {
        self.state.with_mut(|state| state.toggle_lyrics(id))
    }

    pub fn settle_lyrics_open(&mut self, id: &str) {
        self.state.with_mut(|state| state.settle_lyrics_open(id));
    }

    pub fn finish_lyrics_close(&mut self, id: &str) {
        self.state.with_mut(|state| state.finish_lyrics_close(id));
    }

    pub fn set_all_lyrics(&mut self, open: bool) {
        self.state.with_mut(|state| state.set_all_lyrics(open));
    }

    pub fn toggle_description(&mut self, id: &str) -> Option<DescriptionToggle> {
        self.state.with_mut(|state| state.toggle_description(id))
    }

    pub fn typing_is_current(&self, id: &str, generation: u64) -> bool {
        self.state.read().typing_is_current(id, generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(ids: &[&str]) -> PageState {
        let mut state = PageState::default();
        state.install_songs(ids.iter().map(|id| id.to_string()));
        state
    }

    #[test]
    fn lyrics_toggle_round_trip_returns_to_hidden() {
        let mut state = page_with(&["a"]);
        assert_eq!(state.panel("a").lyrics, LyricsPhase::Hidden);

        assert_eq!(state.toggle_lyrics("a"), Some(LyricsToggle::Opening));
        assert_eq!(state.panel("a").lyrics, LyricsPhase::Entering);
        state.settle_lyrics_open("a");
        assert_eq!(state.panel("a").lyrics, LyricsPhase::Open);

        assert_eq!(state.toggle_lyrics("a"), Some(LyricsToggle::Closing));
        assert_eq!(state.panel("a").lyrics, LyricsPhase::Leaving);
        assert!(state.panel("a").lyrics.is_shown());
        state.finish_lyrics_close("a");
        assert_eq!(state.panel("a").lyrics, LyricsPhase::Hidden);
    }

    #[test]
    fn toggle_before_settle_starts_closing() {
        let mut state = page_with(&["a"]);
        state.toggle_lyrics("a");
        assert_eq!(state.toggle_lyrics("a"), Some(LyricsToggle::Closing));
        // The deferred settle from the first toggle must not reopen it.
        state.settle_lyrics_open("a");
        assert_eq!(state.panel("a").lyrics, LyricsPhase::Leaving);
    }

    #[test]
    fn stale_close_timer_does_not_hide_a_reopened_panel() {
        let mut state = page_with(&["a"]);
        state.toggle_lyrics("a");
        state.settle_lyrics_open("a");
        state.toggle_lyrics("a");
        // Reopened before the 300ms close timer fired.
        state.toggle_lyrics("a");
        state.settle_lyrics_open("a");
        state.finish_lyrics_close("a");
        assert_eq!(state.panel("a").lyrics, LyricsPhase::Open);
    }

    #[test]
    fn unknown_song_is_ignored() {
        let mut state = page_with(&["a"]);
        assert_eq!(state.toggle_lyrics("nope"), None);
        assert_eq!(state.toggle_description("nope"), None);
        assert_eq!(state.panel("nope").lyrics, LyricsPhase::Hidden);
        state.finish_lyrics_close("nope");
        state.settle_lyrics_open("nope");
    }

    #[test]
    fn description_is_independent_of_lyrics() {
        let mut state = page_with(&["a"]);
        let opened = state.toggle_description("a");
        assert!(matches!(opened, Some(DescriptionToggle::Opened { .. })));
        assert_eq!(state.panel("a").lyrics, LyricsPhase::Hidden);

        state.toggle_lyrics("a");
        assert!(state.panel("a").description_open);

        assert_eq!(state.toggle_description("a"), Some(DescriptionToggle::Closed));
        assert_eq!(state.panel("a").lyrics, LyricsPhase::Entering);
    }

    #[test]
    fn reopening_description_invalidates_the_previous_reveal() {
        let mut state = page_with(&["a"]);
        let Some(DescriptionToggle::Opened { generation: first }) =
            state.toggle_description("a")
        else {
            panic!("expected an open");
        };
        assert!(state.typing_is_current("a", first));

        state.toggle_description("a");
        let Some(DescriptionToggle::Opened { generation: second }) =
            state.toggle_description("a")
        else {
            panic!("expected a reopen");
        };

        assert!(!state.typing_is_current("a", first));
        assert!(state.typing_is_current("a", second));
    }

    #[test]
    fn closing_description_stops_the_reveal() {
        let mut state = page_with(&["a"]);
        let Some(DescriptionToggle::Opened { generation }) = state.toggle_description("a")
        else {
            panic!("expected an open");
        };
        state.toggle_description("a");
        assert!(!state.typing_is_current("a", generation));
    }

    #[test]
    fn bulk_open_then_close_leaves_every_panel_hidden() {
        let mut state = page_with(&["a", "b", "c"]);
        state.toggle_lyrics("b");
        state.settle_lyrics_open("b");

        state.set_all_lyrics(true);
        for id in ["a", "b", "c"] {
            assert_eq!(state.panel(id).lyrics, LyricsPhase::Open);
            assert_eq!(state.panel(id).last_toggle, ToggleSource::Bulk);
        }

        state.set_all_lyrics(false);
        for id in ["a", "b", "c"] {
            assert_eq!(state.panel(id).lyrics, LyricsPhase::Hidden);
        }
    }

    #[test]
    fn individual_toggle_after_bulk_records_the_individual_source() {
        let mut state = page_with(&["a"]);
        state.set_all_lyrics(true);
        assert_eq!(state.panel("a").last_toggle, ToggleSource::Bulk);
        state.toggle_lyrics("a");
        assert_eq!(state.panel("a").last_toggle, ToggleSource::Individual);
    }

    #[test]
    fn install_is_idempotent() {
        let mut state = page_with(&["a"]);
        state.toggle_lyrics("a");
        state.install_songs(["a".to_string()]);
        assert_eq!(state.panel("a").lyrics, LyricsPhase::Entering);
        assert_eq!(state.song_count(), 1);
    }
}
