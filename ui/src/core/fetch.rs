//! One-shot JSON retrieval for the page's data files.
//!
//! On the web the path is fetched relative to the page URL. On the host it is
//! read from the current working directory.

use std::fmt;

use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response.
    Network(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The body was not the JSON shape we expected.
    Decode(String),
    /// Host-side read failure.
    Io(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(err) => write!(f, "network error: {err}"),
            FetchError::Status(code) => write!(f, "unexpected HTTP status {code}"),
            FetchError::Decode(err) => write!(f, "invalid JSON payload: {err}"),
            FetchError::Io(err) => write!(f, "read failed: {err}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Parse a JSON body into `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|err| FetchError::Decode(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    use gloo_net::http::Request;

    let response = Request::get(path)
        .send()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;
    decode(&body)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let body = std::fs::read_to_string(path).map_err(|err| FetchError::Io(err.to_string()))?;
    decode(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn decode_reports_shape_mismatch() {
        let err = decode::<Vec<String>>(r#"{"not": "a list"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = futures_util::FutureExt::now_or_never(get_json::<HashMap<String, String>>(
            "definitely-not-here.json",
        ))
        .expect("host read is synchronous");
        assert!(matches!(result, Err(FetchError::Io(_))));
    }

    #[test]
    fn status_error_mentions_code() {
        assert_eq!(
            FetchError::Status(404).to_string(),
            "unexpected HTTP status 404"
        );
    }
}
