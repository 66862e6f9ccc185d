//! Page controller logic that lives outside the component tree: the single
//! polling timer slot, the poll loop, the start/stop round trips, and the
//! bookkeeping that decides which page nodes a fetched `/current_info`
//! actually changes.

use crate::api::{ApiError, CurrentInfo, DetectionAck, TrackInfo};
use crate::emotion::EmotionDisplay;
use dioxus::logger::tracing::{error, info};
use std::future::Future;

#[cfg(not(target_arch = "wasm32"))]
async fn poll_delay_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

#[cfg(target_arch = "wasm32")]
async fn poll_delay_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// The three calls the page makes against the detection server.
pub trait DetectionBackend {
    fn start(&self) -> impl Future<Output = Result<DetectionAck, ApiError>>;
    fn stop(&self) -> impl Future<Output = Result<DetectionAck, ApiError>>;
    fn fetch_info(&self) -> impl Future<Output = Result<CurrentInfo, ApiError>>;
}

/// Sleeps one interval, fetches, hands the result to `apply`, forever.
/// Fetch failures are logged and the next tick tries again. The loop ends
/// only when its task is cancelled.
pub async fn poll_loop<B: DetectionBackend>(
    backend: B,
    interval_ms: u32,
    mut apply: impl FnMut(&CurrentInfo),
) {
    loop {
        poll_delay_ms(interval_ms).await;

        match backend.fetch_info().await {
            Ok(info) => apply(&info),
            Err(err) => error!("Error getting current info: {err}"),
        }
    }
}

/// Asks the server to start detecting and runs `on_started` with the ack.
/// A failed request is logged and `on_started` is never called.
pub async fn request_start<B: DetectionBackend>(
    backend: &B,
    on_started: impl FnOnce(DetectionAck),
) -> bool {
    match backend.start().await {
        Ok(ack) => {
            info!(status = ?ack.status, "Detection started");
            on_started(ack);
            true
        }
        Err(err) => {
            error!("Error starting detection: {err}");
            false
        }
    }
}

/// Stop counterpart of [`request_start`].
pub async fn request_stop<B: DetectionBackend>(
    backend: &B,
    on_stopped: impl FnOnce(DetectionAck),
) -> bool {
    match backend.stop().await {
        Ok(ack) => {
            info!(status = ?ack.status, "Detection stopped");
            on_stopped(ack);
            true
        }
        Err(err) => {
            error!("Error stopping detection: {err}");
            false
        }
    }
}

/// A running repeating poll that can be cancelled.
pub trait PollHandle {
    fn cancel_poll(self);
}

impl PollHandle for dioxus::core::Task {
    fn cancel_poll(self) {
        self.cancel();
    }
}

/// Holds at most one active poll handle.
#[derive(Debug)]
pub struct PollingSlot<H> {
    handle: Option<H>,
}

impl<H> Default for PollingSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: PollHandle> PollingSlot<H> {
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Calls `spawn` and keeps its handle, unless a poll is already running.
    /// Returns whether a new poll was started.
    pub fn start_with(&mut self, spawn: impl FnOnce() -> H) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(spawn());
        true
    }

    /// Cancels the running poll, if any. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.cancel_poll();
                true
            }
            None => false,
        }
    }
}

/// Track card contents to write to the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackDisplay {
    pub name: String,
    pub artist: String,
    pub album: String,
    /// `None` leaves whatever artwork is currently shown.
    pub artwork: Option<String>,
}

impl From<&TrackInfo> for TrackDisplay {
    fn from(track: &TrackInfo) -> Self {
        Self {
            name: track.name.clone(),
            artist: track.artist.clone(),
            album: track.album.clone(),
            artwork: track.artwork().map(str::to_string),
        }
    }
}

/// Page writes produced by one poll. `None` fields mean "leave as is".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InfoUpdate {
    pub emotion: Option<EmotionDisplay>,
    pub track: Option<TrackDisplay>,
}

impl InfoUpdate {
    pub fn is_empty(&self) -> bool {
        self.emotion.is_none() && self.track.is_none()
    }
}

/// Remembers the last applied track so repeated reports of the same track
/// do not rewrite the track card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoApplier {
    current_track_uri: Option<String>,
}

impl InfoApplier {
    pub fn current_track_uri(&self) -> Option<&str> {
        self.current_track_uri.as_deref()
    }

    pub fn apply(&mut self, info: &CurrentInfo) -> InfoUpdate {
        let emotion = info
            .emotion
            .as_deref()
            .filter(|label| !label.is_empty())
            .map(EmotionDisplay::from_label);

        let track = match &info.track {
            Some(track) if self.current_track_uri != track.uri => {
                self.current_track_uri = track.uri.clone();
                Some(TrackDisplay::from(track))
            }
            _ => None,
        };

        InfoUpdate { emotion, track }
    }
}
