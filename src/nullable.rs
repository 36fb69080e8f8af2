// 🔲 Field Values - absent / null / present
// Every optional record field carries one of three states so that encoding
// can tell "omit this key" apart from "send null".

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tri-state value of an optional record field.
///
/// Consumers read it through [`Nullable::get`], where `Omitted` and `Null`
/// both mean "unset". The distinction only matters on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Nullable<T> {
    /// Key absent from the JSON object. Never serialized.
    Omitted,

    /// Key present with an explicit `null`.
    Null,

    /// Key present with a value.
    Set(T),
}

impl<T> Nullable<T> {
    pub fn get(&self) -> Option<&T> {
        match self {
            Nullable::Set(value) => Some(value),
            Nullable::Omitted | Nullable::Null => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Set(value) => Some(value),
            Nullable::Omitted | Nullable::Null => None,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Nullable::Set(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    /// Used by serde to drop the key entirely.
    pub fn is_omitted(&self) -> bool {
        matches!(self, Nullable::Omitted)
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Nullable::Omitted => Nullable::Omitted,
            Nullable::Null => Nullable::Null,
            Nullable::Set(value) => Nullable::Set(value),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Nullable::Omitted => Nullable::Omitted,
            Nullable::Null => Nullable::Null,
            Nullable::Set(value) => Nullable::Set(f(value)),
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Omitted
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Set(value)
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    /// `None` becomes an explicit `null`, not an omission.
    fn from(value: Option<T>) -> Self {
        value.map_or(Nullable::Null, Nullable::Set)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Set(value) => serializer.serialize_some(value),
            Nullable::Omitted | Nullable::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    // Absent keys never reach here: record fields use `#[serde(default)]`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<T>::deserialize(deserializer)?;
        Ok(value.map_or(Nullable::Null, Nullable::Set))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Probe {
        #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
        memo: Nullable<String>,
    }

    #[test]
    fn test_absent_key_is_omitted() {
        let probe: Probe = serde_json::from_value(json!({})).unwrap();
        assert!(probe.memo.is_omitted());
        assert_eq!(probe.memo.get(), None);
    }

    #[test]
    fn test_null_key_is_null() {
        let probe: Probe = serde_json::from_value(json!({ "memo": null })).unwrap();
        assert!(probe.memo.is_null());
        assert_eq!(probe.memo.get(), None);
    }

    #[test]
    fn test_present_key_is_set() {
        let probe: Probe = serde_json::from_value(json!({ "memo": "rent" })).unwrap();
        assert_eq!(probe.memo.get().map(String::as_str), Some("rent"));
    }

    #[test]
    fn test_serialization_distinguishes_omitted_and_null() {
        let omitted = Probe::default();
        assert_eq!(serde_json::to_value(&omitted).unwrap(), json!({}));

        let null = Probe { memo: Nullable::Null };
        assert_eq!(serde_json::to_value(&null).unwrap(), json!({ "memo": null }));

        let set = Probe { memo: "rent".to_string().into() };
        assert_eq!(serde_json::to_value(&set).unwrap(), json!({ "memo": "rent" }));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Nullable::<i32>::from(Some(3)), Nullable::Set(3));
        assert_eq!(Nullable::<i32>::from(None), Nullable::Null);
    }

    #[test]
    fn test_map_keeps_state() {
        assert_eq!(Nullable::Set(2).map(|v| v * 10), Nullable::Set(20));
        assert_eq!(Nullable::<i32>::Null.map(|v| v * 10), Nullable::Null);
        assert_eq!(Nullable::<i32>::Omitted.map(|v| v * 10), Nullable::Omitted);
    }
}
