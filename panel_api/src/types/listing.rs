//! Agencies, their agents, and the properties they list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::{Identified, RecordId};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Agency {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Agent {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Owning agency id.
    #[serde(default)]
    pub agency: Option<RecordId>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Property {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub agent: Option<RecordId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identified for Agency {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Identified for Agent {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Identified for Property {
    fn id(&self) -> RecordId {
        self.id
    }
}
