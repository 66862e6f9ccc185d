use crate::components::Icon;
use crate::controller::TrackDisplay;
use dioxus::prelude::*;

const NO_TRACK_TEXT: &str = "No track playing";
const EMPTY_FIELD_TEXT: &str = "-";

/// Artwork, title, artist and album of the track the server reports.
#[component]
pub fn TrackCard(
    #[props(!optional)] track: Option<TrackDisplay>,
    #[props(!optional)] artwork: Option<String>,
) -> Element {
    let (name, artist, album) = match track {
        Some(track) => (track.name, track.artist, track.album),
        None => (
            NO_TRACK_TEXT.to_string(),
            EMPTY_FIELD_TEXT.to_string(),
            EMPTY_FIELD_TEXT.to_string(),
        ),
    };

    rsx! {
        div { class: "track-card",
            if let Some(url) = artwork {
                img {
                    id: "albumArt",
                    class: "album-art",
                    src: "{url}",
                    alt: "Album art",
                }
            } else {
                div { id: "albumArt", class: "album-art album-art-placeholder",
                    Icon { name: "music".to_string(), class: "w-12 h-12".to_string() }
                }
            }
            div { class: "track-meta",
                p { id: "trackName", class: "track-name", "{name}" }
                p { id: "artistName", class: "track-artist", "{artist}" }
                p { id: "albumName", class: "track-album", "{album}" }
            }
        }
    }
}
