use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod controller;
mod emotion;

use components::DetectionPage;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "MoodTune" }
        document::Meta { name: "theme-color", content: "#121212" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        document::Stylesheet { href: APP_CSS }

        DetectionPage {}
    }
}
