//! Asynchronous dataset fetch.

use std::fmt;
use tesela_data::{records_from_json, DataError, Record};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Error fetching or decoding the dataset document.
#[derive(Debug)]
pub enum FetchError {
    /// The request never completed (network failure, missing window).
    Network(String),
    /// The server answered with a non-success status.
    Http(u16),
    /// The body was not a decodable dataset document.
    Parse(DataError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(detail) => write!(f, "network error: {detail}"),
            Self::Http(status) => write!(f, "http error: status {status}"),
            Self::Parse(err) => write!(f, "dataset error: {err}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DataError> for FetchError {
    fn from(err: DataError) -> Self {
        Self::Parse(err)
    }
}

/// Fetch a dataset document and resolve it into records.
///
/// Runs exactly once per chart load; failure is surfaced to the caller
/// and the chart never starts. There is no retry.
pub async fn fetch_records(url: &str) -> Result<Vec<Record>, FetchError> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::Network(format!("{e:?}")))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| FetchError::Network("response is not a Response".to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http(response.status()));
    }

    let text = response
        .text()
        .map_err(|e| FetchError::Network(format!("{e:?}")))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| FetchError::Network(format!("{e:?}")))?;
    let body = text
        .as_string()
        .ok_or_else(|| FetchError::Network("body is not text".to_string()))?;

    Ok(records_from_json(&body)?)
}
