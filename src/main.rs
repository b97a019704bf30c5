use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod state;
mod utils;

use components::LyricsPage;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Songbook" }
        document::Meta { name: "theme-color", content: "#18181b" }

        document::Stylesheet { href: APP_CSS }

        LyricsPage {}
    }
}
