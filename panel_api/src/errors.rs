//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, invalid URL, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status. `message` is the backend's own
    /// error text when the body carried one.
    #[error("Request failed with status {status}")]
    HttpStatus {
        status: u16,
        message: Option<String>,
        body: String,
    },
    /// A success response whose body was not valid JSON for the expected type.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl Error {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message reported by the backend in a structured error body.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Error::HttpStatus {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Pulls a human readable message out of a JSON error body.
///
/// Checks `metaData.message`, then the top-level `message`, `detail` and
/// `error` keys. Returns `None` for non-JSON bodies.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let candidates = [
        value.pointer("/metaData/message"),
        value.get("message"),
        value.get("detail"),
        value.get("error"),
    ];
    let message = candidates
        .into_iter()
        .flatten()
        .find_map(|v| v.as_str().map(str::to_string))
        .filter(|m| !m.is_empty());
    message
}
