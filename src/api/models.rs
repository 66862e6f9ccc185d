use dioxus::logger::tracing::warn;
use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Drops a `track` object that does not decode instead of failing the whole
/// reply, so the emotion from the same poll still lands.
fn lenient_track<'de, D>(deserializer: D) -> Result<Option<TrackInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match serde_json::from_value(value) {
        Ok(track) => Ok(Some(track)),
        Err(err) => {
            warn!("Ignoring malformed track: {err}");
            Ok(None)
        }
    }
}

/// Reply body of `/start_detection` and `/stop_detection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DetectionAck {
    #[serde(default)]
    pub status: DetectionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum DetectionStatus {
    Started,
    AlreadyRunning,
    Stopped,
    #[default]
    Unknown,
    Other(String),
}

impl From<String> for DetectionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "started" => DetectionStatus::Started,
            "already_running" => DetectionStatus::AlreadyRunning,
            "stopped" => DetectionStatus::Stopped,
            "" => DetectionStatus::Unknown,
            _ => DetectionStatus::Other(value),
        }
    }
}

impl From<DetectionStatus> for String {
    fn from(value: DetectionStatus) -> Self {
        match value {
            DetectionStatus::Started => "started".to_string(),
            DetectionStatus::AlreadyRunning => "already_running".to_string(),
            DetectionStatus::Stopped => "stopped".to_string(),
            DetectionStatus::Unknown => String::new(),
            DetectionStatus::Other(raw) => raw,
        }
    }
}

impl DetectionStatus {
    /// Short text for the status line under the buttons.
    pub fn label(&self) -> String {
        match self {
            DetectionStatus::Started => "Detecting".to_string(),
            DetectionStatus::AlreadyRunning => "Already running".to_string(),
            DetectionStatus::Stopped => "Stopped".to_string(),
            DetectionStatus::Unknown => "Idle".to_string(),
            DetectionStatus::Other(raw) => raw.clone(),
        }
    }
}

/// Reply body of `/current_info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CurrentInfo {
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default, deserialize_with = "lenient_track")]
    pub track: Option<TrackInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TrackInfo {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub album: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl TrackInfo {
    /// Artwork URL, if the server sent a usable one.
    pub fn artwork(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_current_info() {
        let info: CurrentInfo = serde_json::from_str(
            r#"{"emotion":"happy","track":{"uri":"t1","name":"Song","artist":"Artist","album":"Album","image":"x.jpg"}}"#,
        )
        .unwrap();
        assert_eq!(info.emotion.as_deref(), Some("happy"));
        let track = info.track.unwrap();
        assert_eq!(track.uri.as_deref(), Some("t1"));
        assert_eq!(track.name, "Song");
        assert_eq!(track.artist, "Artist");
        assert_eq!(track.album, "Album");
        assert_eq!(track.artwork(), Some("x.jpg"));
    }

    #[test]
    fn tolerates_missing_and_null_fields() {
        let info: CurrentInfo = serde_json::from_str(r#"{"emotion":"neutral","track":null}"#).unwrap();
        assert_eq!(info.emotion.as_deref(), Some("neutral"));
        assert!(info.track.is_none());

        let info: CurrentInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info, CurrentInfo::default());

        let info: CurrentInfo =
            serde_json::from_str(r#"{"track":{"uri":"t2","name":null,"image":""}}"#).unwrap();
        let track = info.track.unwrap();
        assert_eq!(track.name, "");
        assert_eq!(track.artist, "");
        assert_eq!(track.artwork(), None);
    }

    #[test]
    fn null_uri_decodes_as_absent() {
        let info: CurrentInfo =
            serde_json::from_str(r#"{"track":{"uri":null,"name":"Song"}}"#).unwrap();
        let track = info.track.unwrap();
        assert_eq!(track.uri, None);
        assert_eq!(track.name, "Song");
    }

    #[test]
    fn malformed_track_keeps_the_emotion() {
        let info: CurrentInfo = serde_json::from_str(
            r#"{"emotion":"sad","track":{"uri":"t1","name":7,"artist":"Artist"}}"#,
        )
        .unwrap();
        assert_eq!(info.emotion.as_deref(), Some("sad"));
        assert!(info.track.is_none());

        let info: CurrentInfo = serde_json::from_str(r#"{"emotion":"fear","track":"t1"}"#).unwrap();
        assert_eq!(info.emotion.as_deref(), Some("fear"));
        assert!(info.track.is_none());
    }

    #[test]
    fn decodes_ack_statuses() {
        let ack: DetectionAck = serde_json::from_str(r#"{"status":"started"}"#).unwrap();
        assert_eq!(ack.status, DetectionStatus::Started);
        let ack: DetectionAck = serde_json::from_str(r#"{"status":"already_running"}"#).unwrap();
        assert_eq!(ack.status, DetectionStatus::AlreadyRunning);
        assert_eq!(ack.status.label(), "Already running");
        let ack: DetectionAck = serde_json::from_str(r#"{"status":"warming_up"}"#).unwrap();
        assert_eq!(ack.status, DetectionStatus::Other("warming_up".to_string()));
        let ack: DetectionAck = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.status, DetectionStatus::Unknown);
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(serde_json::from_str::<CurrentInfo>(r#"{"emotion":42}"#).is_err());
        assert!(serde_json::from_str::<CurrentInfo>("<html>").is_err());
    }
}
