//! Editorial content and support tickets.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::{Identified, RecordId};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Blog {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Portfolio {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Cover image, as a media id or URL.
    #[serde(default)]
    pub image: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ticket {
    pub id: RecordId,
    pub subject: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identified for Blog {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Identified for Portfolio {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Identified for Ticket {
    fn id(&self) -> RecordId {
        self.id
    }
}
