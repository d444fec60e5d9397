//! Media library entries.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::{Identified, RecordId};
use crate::query::{FilterValue, Scalar};

/// File type filter/label for media entries. `All` is the "no filter"
/// sentinel and is never sent to the backend.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    All,
    Image,
    Video,
    Audio,
    Document,
    #[serde(other)]
    Other,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FileType::All => "all",
                FileType::Image => "image",
                FileType::Video => "video",
                FileType::Audio => "audio",
                FileType::Document => "document",
                FileType::Other => "other",
            }
        )
    }
}

impl From<FileType> for FilterValue {
    fn from(value: FileType) -> Self {
        FilterValue::One(Scalar::Str(value.to_string()))
    }
}

/// A single uploaded file as listed by `/media/`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub file_type: Option<FileType>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identified for MediaItem {
    fn id(&self) -> RecordId {
        self.id
    }
}
