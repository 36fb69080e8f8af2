// 🔗 Related Records - id or embedded object
// Related resources arrive as their id unless the caller asked the API to
// expand them, in which case the full object is embedded.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expandable<T> {
    Id(String),
    Expanded(T),
}

impl<T> Expandable<T> {
    /// The embedded record, if the reference was expanded
    pub fn expanded(&self) -> Option<&T> {
        match self {
            Expandable::Expanded(record) => Some(record),
            Expandable::Id(_) => None,
        }
    }

    pub fn as_id(&self) -> Option<&str> {
        match self {
            Expandable::Id(id) => Some(id),
            Expandable::Expanded(_) => None,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Expandable::Expanded(_))
    }
}

impl<T> From<String> for Expandable<T> {
    fn from(id: String) -> Self {
        Expandable::Id(id)
    }
}

impl<T> From<&str> for Expandable<T> {
    fn from(id: &str) -> Self {
        Expandable::Id(id.to_string())
    }
}

impl<T: Serialize> Serialize for Expandable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Expandable::Id(id) => serializer.serialize_str(id),
            Expandable::Expanded(record) => record.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Expandable<T> {
    // Decoding through `Value` keeps the embedded record's own error message
    // instead of serde's generic untagged-enum failure.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(id) => Ok(Expandable::Id(id)),
            value @ Value::Object(_) => T::deserialize(value).map(Expandable::Expanded).map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected id string or object, found {}",
                other
            ))),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
