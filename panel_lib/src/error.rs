//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream transport errors
/// and adding configuration, serialization, and input validation failures.
#[derive(Debug)]
pub enum PanelError {
    /// An error from the underlying API client.
    Api(panel_api::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// The configuration file could not be read or parsed.
    Config(String),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::Config(msg) => write!(f, "Config error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for PanelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<panel_api::Error> for PanelError {
    fn from(e: panel_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
