use crate::api::{ApiError, CurrentInfo, DetectionAck};
use crate::config::ControllerConfig;
use crate::controller::DetectionBackend;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const START_ENDPOINT: &str = "start_detection";
const STOP_ENDPOINT: &str = "stop_detection";
const CURRENT_INFO_ENDPOINT: &str = "current_info";
const VIDEO_FEED_ENDPOINT: &str = "video_feed";

#[derive(Debug, Clone, PartialEq)]
pub struct DetectionClient {
    base_url: String,
}

impl DetectionClient {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// MJPEG stream of the detection camera, shown as-is by the page.
    pub fn video_feed_url(&self) -> String {
        self.endpoint_url(VIDEO_FEED_ENDPOINT)
    }

    pub async fn start_detection(&self) -> Result<DetectionAck, ApiError> {
        self.get_json(START_ENDPOINT).await
    }

    pub async fn stop_detection(&self) -> Result<DetectionAck, ApiError> {
        self.get_json(STOP_ENDPOINT).await
    }

    pub async fn current_info(&self) -> Result<CurrentInfo, ApiError> {
        self.get_json(CURRENT_INFO_ENDPOINT).await
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint);
        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(ApiError::from_reqwest)
    }
}

impl DetectionBackend for DetectionClient {
    async fn start(&self) -> Result<DetectionAck, ApiError> {
        self.start_detection().await
    }

    async fn stop(&self) -> Result<DetectionAck, ApiError> {
        self.stop_detection().await
    }

    async fn fetch_info(&self) -> Result<CurrentInfo, ApiError> {
        self.current_info().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls_from_base() {
        let config = ControllerConfig::new("http://localhost:5000/", 1000);
        let client = DetectionClient::new(&config);
        assert_eq!(
            client.endpoint_url(CURRENT_INFO_ENDPOINT),
            "http://localhost:5000/current_info"
        );
        assert_eq!(client.video_feed_url(), "http://localhost:5000/video_feed");
    }
}
