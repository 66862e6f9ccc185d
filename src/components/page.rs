use crate::api::*;
use crate::components::{Icon, TrackCard};
use crate::config::ControllerConfig;
use crate::controller::{
    poll_loop, request_start, request_stop, InfoApplier, PollingSlot, TrackDisplay,
};
use crate::emotion::EmotionDisplay;
use dioxus::logger::tracing::{debug, info};
use dioxus::core::Task;
use dioxus::prelude::*;

/// Everything a poll may write to. Signals are `Copy`, so this is too.
#[derive(Clone, Copy)]
struct PageSignals {
    applier: Signal<InfoApplier>,
    emotion: Signal<EmotionDisplay>,
    track: Signal<Option<TrackDisplay>>,
    artwork: Signal<Option<String>>,
    last_updated: Signal<Option<String>>,
}

impl PageSignals {
    fn apply(mut self, info: &CurrentInfo) {
        let update = self.applier.write().apply(info);
        if update.is_empty() {
            debug!("Current info carried nothing new");
        }

        if let Some(emotion) = update.emotion {
            self.emotion.set(emotion);
        }

        if let Some(track) = update.track {
            debug!(uri = ?self.applier.peek().current_track_uri(), "Track changed");
            if let Some(url) = track.artwork.clone() {
                self.artwork.set(Some(url));
            }
            self.track.set(Some(track));
        }

        self.last_updated
            .set(Some(chrono::Local::now().format("%H:%M:%S").to_string()));
    }
}

fn start_polling(
    mut polling: Signal<PollingSlot<Task>>,
    client: DetectionClient,
    interval_ms: u32,
    signals: PageSignals,
) {
    let started = polling
        .write()
        .start_with(|| spawn(poll_loop(client, interval_ms, move |info| signals.apply(info))));
    if started {
        info!(interval_ms, "Polling for current info");
    }
}

fn stop_polling(mut polling: Signal<PollingSlot<Task>>) {
    if polling.write().stop() {
        info!("Polling stopped");
    }
}

#[component]
pub fn DetectionPage() -> Element {
    let config = use_hook(ControllerConfig::resolve);
    let client = use_hook(|| DetectionClient::new(&config));
    let interval_ms = config.poll_interval_ms;

    let polling = use_signal(PollingSlot::<Task>::default);
    let status = use_signal(|| DetectionStatus::Unknown);
    let signals = PageSignals {
        applier: use_signal(InfoApplier::default),
        emotion: use_signal(EmotionDisplay::default),
        track: use_signal(|| None::<TrackDisplay>),
        artwork: use_signal(|| None::<String>),
        last_updated: use_signal(|| None::<String>),
    };

    let video_feed_url = client.video_feed_url();

    let on_start = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            let mut status = status;
            spawn(async move {
                request_start(&client, |ack| {
                    status.set(ack.status);
                    start_polling(polling, client.clone(), interval_ms, signals);
                })
                .await;
            });
        }
    };

    let on_stop = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            let mut status = status;
            spawn(async move {
                request_stop(&client, |ack| {
                    status.set(ack.status);
                    stop_polling(polling);
                })
                .await;
            });
        }
    };

    let emotion = (signals.emotion)();
    let emotion_color = emotion.color;
    let emotion_text = emotion.text;
    let status_label = status().label();
    let status_class = if polling.read().is_active() {
        "status-line status-live"
    } else {
        "status-line"
    };
    let last_updated = (signals.last_updated)();

    rsx! {
        main { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "MoodTune" }
                p { class: "page-subtitle", "Music that follows how you feel" }
            }

            div { class: "page-grid",
                section { class: "panel camera-panel",
                    h2 { class: "panel-title",
                        Icon { name: "camera".to_string(), class: "w-5 h-5".to_string() }
                        "Camera"
                    }
                    img {
                        id: "videoFeed",
                        class: "video-feed",
                        src: "{video_feed_url}",
                        alt: "Camera feed",
                    }
                    div { class: "controls",
                        button {
                            id: "startBtn",
                            class: "btn btn-start",
                            onclick: on_start,
                            Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                            "Start Detection"
                        }
                        button {
                            id: "stopBtn",
                            class: "btn btn-stop",
                            onclick: on_stop,
                            Icon { name: "stop".to_string(), class: "w-4 h-4".to_string() }
                            "Stop Detection"
                        }
                    }
                    p { class: "{status_class}", "{status_label}" }
                }

                section { class: "panel info-panel",
                    div { class: "emotion-card",
                        h2 { class: "panel-title", "Current Emotion" }
                        p {
                            id: "emotionText",
                            class: "emotion-text",
                            style: "color: {emotion_color}",
                            "{emotion_text}"
                        }
                    }

                    h2 { class: "panel-title",
                        Icon { name: "music".to_string(), class: "w-5 h-5".to_string() }
                        "Now Playing"
                    }
                    TrackCard { track: (signals.track)(), artwork: (signals.artwork)() }

                    if let Some(stamp) = last_updated {
                        p { class: "last-updated", "Updated {stamp}" }
                    }
                }
            }
        }
    }
}
