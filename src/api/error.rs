use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Splits a transport failure from a body that did not decode.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Request(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_code() {
        assert_eq!(
            ApiError::Status(503).to_string(),
            "server answered with status 503"
        );
    }
}
