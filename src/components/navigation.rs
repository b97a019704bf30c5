use dioxus::prelude::*;

use crate::api::Song;

/// In-page navigation for the navigation-enabled variant: one entry per
/// song, smooth-scrolling to its section.
#[component]
pub fn NavList(songs: Vec<Song>) -> Element {
    rsx! {
        nav { class: "song-nav",
            ul { id: "nav-list",
                for song in songs {
                    li {
                        button {
                            class: "nav-link",
                            onclick: {
                                let target = song.section_dom_id();
                                move |_| {
                                    let script = format!(
                                        r#"(function() {{
                                            const section = document.getElementById("{target}");
                                            if (!section) return;
                                            section.scrollIntoView({{ behavior: "smooth", block: "start" }});
                                        }})();"#
                                    );
                                    let _ = document::eval(&script);
                                }
                            },
                            "{song.title}"
                        }
                    }
                }
            }
        }
    }
}
