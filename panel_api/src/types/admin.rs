//! Panel administrators and their roles.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::{Identified, RecordId};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AdminUser {
    pub id: RecordId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Role name or id, depending on the backend version.
    #[serde(default)]
    pub role: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AdminUser {
    /// "First Last", falling back to the username.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.username.clone().unwrap_or_default()
        } else {
            full
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Role {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identified for AdminUser {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Identified for Role {
    fn id(&self) -> RecordId {
        self.id
    }
}
