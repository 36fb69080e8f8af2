// 🧮 TaxRate

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Number, Value};

use crate::entities::common::RemoteData;
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    pub struct TaxRate {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "company" => company: String = FieldKind::String,
        "code" => code: String = FieldKind::String,
        "name" => name: String = FieldKind::String,
        "description" => description: String = FieldKind::String,
        /// Percentage, e.g. `15.0`
        "total_tax_rate" => total_tax_rate: Number = FieldKind::Number,
        "effective_tax_rate" => effective_tax_rate: Number = FieldKind::Number,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nullable::Nullable;
    use crate::record::TypedRecord;
    use serde_json::json;

    #[test]
    fn test_tax_rate_accepts_integer_percentages() {
        let rate = TaxRate::from_value(json!({ "name": "VAT", "total_tax_rate": 20 })).unwrap();
        assert_eq!(rate.total_tax_rate, Nullable::Set(Number::from(20)));
        assert!(TaxRate::validate_raw(&json!({ "total_tax_rate": 20 })).is_ok());
    }

    #[test]
    fn test_tax_rate_rejects_string_percentage() {
        let err = TaxRate::validate_raw(&json!({ "effective_tax_rate": "20%" })).unwrap_err();
        let validation = err.as_validation().unwrap();
        assert_eq!(validation.field, "effective_tax_rate");
        assert_eq!(validation.message, "expected number, found string");
    }
}
