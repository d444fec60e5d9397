//! The canonical result envelope every normalized operation returns.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Success,
    Error,
}

/// Status block attached to every envelope.
///
/// Deserialization is field-by-field lenient: a field the backend sent in an
/// unexpected form falls back on its own instead of failing the whole block.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MetaData {
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Status,
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: String,
    #[serde(
        rename = "AppStatusCode",
        default = "default_status_code",
        deserialize_with = "lenient_status_code"
    )]
    pub app_status_code: u16,
    #[serde(default = "Utc::now", deserialize_with = "lenient_timestamp")]
    pub timestamp: DateTime<Utc>,
}

fn default_status_code() -> u16 {
    200
}

// Anything other than a case-insensitive "error" counts as success.
fn lenient_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Status, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value.as_str().map(str::trim) {
        Some(s) if s.eq_ignore_ascii_case("error") => Status::Error,
        _ => Status::Success,
    })
}

fn lenient_message<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lenient_status_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let code = match &value {
        Value::Number(n) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
        Value::String(s) => s.trim().parse::<u16>().ok(),
        _ => None,
    };
    Ok(code.unwrap_or_else(default_status_code))
}

/// Accepts RFC 3339, or a naive `YYYY-MM-DD[T ]HH:MM:SS[.f]` taken as UTC.
fn lenient_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(parse_timestamp).unwrap_or_else(Utc::now))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

impl MetaData {
    pub fn success(message: &str) -> Self {
        Self {
            status: Status::Success,
            message: message.to_string(),
            app_status_code: 200,
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: &str, app_status_code: u16) -> Self {
        Self {
            status: Status::Error,
            message: message.to_string(),
            app_status_code,
            timestamp: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Pagination block of a list envelope.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PaginationState {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

impl PaginationState {
    /// Zero results at the given page/size.
    pub fn empty(current_page: u64, page_size: u64) -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            page_size,
            current_page,
            total_pages: 0,
        }
    }
}

/// `{metaData, data, pagination?}` wrapper returned by every normalized operation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Envelope<T> {
    #[serde(rename = "metaData")]
    pub meta_data: MetaData,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationState>,
}

impl<T> Envelope<T> {
    pub fn new(meta_data: MetaData, data: T, pagination: Option<PaginationState>) -> Self {
        Self {
            meta_data,
            data,
            pagination,
        }
    }

    pub fn is_success(&self) -> bool {
        self.meta_data.is_success()
    }
}
