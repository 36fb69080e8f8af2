// 📦 Typed Record contract
// Decode, encode and validate, shared by every record declared with
// `typed_record!`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::fields::RecordSchema;
use crate::schema::SchemaValidator;

pub trait TypedRecord: Serialize + DeserializeOwned {
    /// Static descriptor table for this record type
    fn schema() -> &'static RecordSchema;

    /// JSON keys that were present on decode but not declared by the schema
    fn additional_properties(&self) -> &Map<String, Value>;

    /// Decode from JSON text.
    ///
    /// Absent keys stay omitted, `null` stays null, nested records decode
    /// recursively and unknown keys land in [`TypedRecord::additional_properties`].
    /// Enum values outside their documented set are kept, not rejected.
    fn from_json(raw: &str) -> Result<Self> {
        let record: Self = serde_json::from_str(raw).map_err(|source| Error::Decode {
            record: Self::schema().name,
            source,
        })?;
        log_decoded(&record);
        Ok(record)
    }

    fn from_value(value: Value) -> Result<Self> {
        let record: Self = serde_json::from_value(value).map_err(|source| Error::Decode {
            record: Self::schema().name,
            source,
        })?;
        log_decoded(&record);
        Ok(record)
    }

    fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|source| Error::Encode {
            record: Self::schema().name,
            source,
        })
    }

    /// Encode as compact JSON; omitted fields are left out entirely.
    fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|source| Error::Encode {
            record: Self::schema().name,
            source,
        })
    }

    fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| Error::Encode {
            record: Self::schema().name,
            source,
        })
    }

    /// Check that `candidate` has the shape this record declares.
    fn validate_raw(candidate: &Value) -> Result<()> {
        Self::validate_raw_with(&SchemaValidator::new(), candidate)
    }

    fn validate_raw_with(validator: &SchemaValidator, candidate: &Value) -> Result<()> {
        validator.validate(Self::schema(), candidate)?;
        Ok(())
    }

    /// Validate this instance as it would be sent over the wire.
    fn validate(&self) -> Result<()> {
        Self::validate_raw(&self.to_value()?)
    }
}

fn log_decoded<T: TypedRecord>(record: &T) {
    tracing::debug!(
        record = T::schema().name,
        unknown_keys = record.additional_properties().len(),
        "decoded record"
    );
}
