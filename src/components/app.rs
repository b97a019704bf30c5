use dioxus::logger::tracing;
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

use crate::api::fetch_song_library;
use crate::components::{Icon, NavList, SongSection};
use crate::config::PageConfig;
use crate::state::{PageController, PageState};

/// The page shell: loads the song library once, owns the panel state, and
/// renders the navigation list, the song sections, or the single error
/// panel when the data cannot be loaded.
#[component]
pub fn LyricsPage() -> Element {
    let config = use_context_provider(PageConfig::default);
    let state = use_signal(PageState::default);
    let controller = PageController::new(state);
    use_context_provider(|| controller.clone());

    let library = use_resource(|| async move {
        fetch_song_library().await.map_err(|error| {
            tracing::error!(%error, "failed to load song data");
            error.to_string()
        })
    });

    // Install a panel record per song once the data arrives. The library
    // itself stays read-only from here on.
    {
        let controller = controller.clone();
        use_effect(move || {
            if let Some(Ok(library)) = library.read().as_ref() {
                tracing::info!(songs = library.songs.len(), "song library loaded");
                let ids: Vec<String> = library.songs.iter().map(|song| song.id.clone()).collect();
                let mut controller = controller.clone();
                controller.install_songs(ids);
            }
        });
    }

    // Global shortcuts: Ctrl/Cmd+A shows every lyrics panel, Ctrl/Cmd+H
    // hides them, both with the browser default suppressed.
    let _controller_for_shortcuts = controller.clone();
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let Some(win) = window() else {
            return;
        };

        let runtime = Runtime::current();
        let controller = _controller_for_shortcuts.clone();
        let keydown_cb = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let Some(show) = bulk_shortcut_from_key(&event) else {
                return;
            };
            event.prevent_default();
            tracing::debug!(show, "bulk lyrics shortcut");
            let mut controller = controller.clone();
            controller.set_all_lyrics(show);
        }) as Box<dyn FnMut(_)>);

        let _ = win.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());
        keydown_cb.forget();
    });

    rsx! {
        div { class: "page-shell",
            header { class: "page-header",
                h1 { "Songbook" }
                p { class: "page-subtitle", "Song stories and lyrics" }
            }

            {match library() {
                Some(Ok(library)) => rsx! {
                    if config.navigation {
                        NavList { songs: library.songs.clone() }
                    }
                    div { id: "songs-container", class: "songs-container",
                        for (index, song) in library.songs.iter().enumerate() {
                            SongSection { song: song.clone(), index }
                        }
                    }
                },
                Some(Err(_)) => rsx! {
                    div { id: "songs-container", class: "songs-container",
                        div { class: "error-message",
                            Icon { name: "alert".to_string(), class: "error-icon".to_string() }
                            h2 { "⚠️ Could not load the song data" }
                            p { "Check the lyrics-data.json file." }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading-row",
                        Icon { name: "loader".to_string(), class: "loading-icon".to_string() }
                        "Loading songs..."
                    }
                }
            }}
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn is_editable_shortcut_target(event: &web_sys::KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element.has_attribute("contenteditable")
            && element
                .get_attribute("contenteditable")
                .map(|v| v.to_ascii_lowercase() != "false")
                .unwrap_or(true)
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

/// Maps a key event to a bulk visibility request: `Some(true)` shows every
/// lyrics panel, `Some(false)` hides them. Events already claimed by the
/// page, IME composition, or editable elements are left alone.
#[cfg(target_arch = "wasm32")]
fn bulk_shortcut_from_key(event: &web_sys::KeyboardEvent) -> Option<bool> {
    if event.default_prevented() || event.is_composing() || is_editable_shortcut_target(event) {
        return None;
    }
    if !(event.ctrl_key() || event.meta_key()) || event.alt_key() || event.shift_key() {
        return None;
    }

    match event.key().to_ascii_lowercase().as_str() {
        "a" => Some(true),
        "h" => Some(false),
        _ => None,
    }
}
