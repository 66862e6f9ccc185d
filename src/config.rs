//! Controller configuration. Resolved once at startup and never persisted.

pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1000;
pub const MIN_POLL_INTERVAL_MS: u32 = 100;

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Scheme, host and optional path prefix; never ends with `/`.
    pub base_url: String,
    pub poll_interval_ms: u32,
}

impl ControllerConfig {
    pub fn new(base_url: impl Into<String>, poll_interval_ms: u32) -> Self {
        Self {
            base_url: base_url.into().trim().trim_end_matches('/').to_string(),
            poll_interval_ms: poll_interval_ms.max(MIN_POLL_INTERVAL_MS),
        }
    }

    /// Resolves the base URL for the current build and target.
    ///
    /// A `MOODTUNE_SERVER_URL` set at compile time wins. Otherwise the web
    /// build talks to the origin that served the page, and the desktop build
    /// talks to a server on the local machine.
    pub fn resolve() -> Self {
        let base_url = option_env!("MOODTUNE_SERVER_URL")
            .map(str::to_string)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(default_server_url);
        Self::new(base_url, DEFAULT_POLL_INTERVAL_MS)
    }
}

#[cfg(target_arch = "wasm32")]
fn default_server_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_server_url() -> String {
    NATIVE_SERVER_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes_and_whitespace() {
        let config = ControllerConfig::new(" http://host:5000// ", 1000);
        assert_eq!(config.base_url, "http://host:5000");
        assert_eq!(config.poll_interval_ms, 1000);
    }

    #[test]
    fn clamps_tiny_poll_interval() {
        assert_eq!(
            ControllerConfig::new("http://host", 0).poll_interval_ms,
            MIN_POLL_INTERVAL_MS
        );
        assert_eq!(ControllerConfig::new("http://host", 250).poll_interval_ms, 250);
    }

    #[test]
    fn resolves_with_default_interval() {
        let config = ControllerConfig::resolve();
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert!(!config.base_url.ends_with('/'));
        assert!(!config.base_url.is_empty());
    }
}
