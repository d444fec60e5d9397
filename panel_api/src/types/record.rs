//! Identity shared by every panel resource, and the schema-less [`Record`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Numeric primary key used by every panel resource.
pub type RecordId = i64;

/// Anything with a primary key, so a list page can be scanned for one entry.
pub trait Identified {
    fn id(&self) -> RecordId;
}

/// A resource row with no fixed schema beyond its `id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Identified for Record {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record {
    /// First of `keys` present as a non-empty string.
    pub fn first_str(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|k| self.fields.get(*k))
            .find_map(|v| v.as_str().filter(|s| !s.is_empty()))
    }

    /// Field rendered for display: strings as-is, other scalars via JSON, null as empty.
    pub fn display_field(&self, key: &str) -> String {
        match self.fields.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
