use dioxus::prelude::*;

use crate::api::Song;
use crate::components::Icon;
use crate::config::PageConfig;
use crate::state::{
    DescriptionToggle, LyricsPhase, LyricsToggle, PageController, LYRICS_ENTER_DEFER_MS,
    LYRICS_TRANSITION_MS, TYPEWRITER_INTERVAL_MS,
};
use crate::utils::{ordinal_label, sleep_ms};

/// One song section: header with the lyrics toggle, the description trigger
/// with its typing reveal, and the collapsible lyrics container.
#[component]
pub fn SongSection(song: Song, index: usize) -> Element {
    let config = use_context::<PageConfig>();
    let controller = use_context::<PageController>();

    let panel = controller.panel(&song.id);

    // Holds whatever the description container currently shows. It starts
    // as the full text; opening the panel clears it and retypes, and a
    // close leaves the partial text behind in the hidden container.
    let typed = use_signal(|| song.description.clone());

    let on_toggle_lyrics = {
        let controller = controller.clone();
        let song_id = song.id.clone();
        move |_| {
            let mut controller = controller.clone();
            match controller.toggle_lyrics(&song_id) {
                Some(LyricsToggle::Opening) => {
                    // Defer the transition styles by a tick so the panel is
                    // first committed in its start state.
                    let mut controller = controller.clone();
                    let song_id = song_id.clone();
                    spawn(async move {
                        sleep_ms(LYRICS_ENTER_DEFER_MS).await;
                        controller.settle_lyrics_open(&song_id);
                    });
                }
                Some(LyricsToggle::Closing) => {
                    // Keep the panel in layout until the fade-out has run.
                    let mut controller = controller.clone();
                    let song_id = song_id.clone();
                    spawn(async move {
                        sleep_ms(LYRICS_TRANSITION_MS).await;
                        controller.finish_lyrics_close(&song_id);
                    });
                }
                None => {}
            }
        }
    };

    let on_toggle_description = {
        let controller = controller.clone();
        let song_id = song.id.clone();
        let description = song.description.clone();
        let typed = typed.clone();
        move |_| {
            let mut controller = controller.clone();
            match controller.toggle_description(&song_id) {
                Some(DescriptionToggle::Opened { generation }) => {
                    let mut typed = typed.clone();
                    typed.set(String::new());
                    let controller = controller.clone();
                    let song_id = song_id.clone();
                    let description = description.clone();
                    spawn(async move {
                        for character in description.chars() {
                            // A newer reveal or a close owns the panel now.
                            if !controller.typing_is_current(&song_id, generation) {
                                return;
                            }
                            typed.with_mut(|text| text.push(character));
                            sleep_ms(TYPEWRITER_INTERVAL_MS).await;
                        }
                    });
                }
                Some(DescriptionToggle::Closed) | None => {}
            }
        }
    };

    let shown = panel.lyrics.is_shown();
    let toggle_label = if shown { "Hide lyrics" } else { "Show lyrics" };
    let toggle_icon = config.toggle_icon_name(panel.last_toggle, shown);

    let lyrics_style = match panel.lyrics {
        LyricsPhase::Hidden => "display: none;",
        LyricsPhase::Entering => "display: block; opacity: 0; transform: translateY(-20px);",
        LyricsPhase::Open => {
            "display: block; opacity: 1; transform: translateY(0); \
             transition: opacity 0.3s ease, transform 0.3s ease;"
        }
        LyricsPhase::Leaving => {
            "display: block; opacity: 0; transform: translateY(-20px); \
             transition: opacity 0.3s ease, transform 0.3s ease;"
        }
    };

    let collapsed_hint = if config.ordinal_hints {
        format!("{} ⋯", ordinal_label(index))
    } else {
        "⋯".to_string()
    };

    let section_id = song.section_dom_id();
    let lyrics_id = song.lyrics_dom_id();
    let description_id = song.description_dom_id();

    rsx! {
        section { id: "{section_id}", class: "song-section",
            div { class: "song-header",
                h2 { "🎶 {song.title}" }
                button { class: "lyrics-toggle", onclick: on_toggle_lyrics,
                    Icon {
                        name: toggle_icon.to_string(),
                        class: "toggle-icon".to_string(),
                    }
                    span { "{toggle_label}" }
                }
            }

            div { class: "description-trigger", onclick: on_toggle_description,
                if !panel.description_open {
                    span { class: "description-dots", "{collapsed_hint}" }
                }
                div {
                    id: "{description_id}",
                    class: "description-content",
                    style: if panel.description_open { "display: block;" } else { "display: none;" },
                    "{typed}"
                }
            }

            div {
                id: "{lyrics_id}",
                class: "lyrics-container",
                style: "{lyrics_style}",
                pre { class: "lyrics", "{song.lyrics}" }
            }
        }
    }
}
