// 🧱 Shared building blocks embedded by the resource records

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::enums::AddressType;
use crate::fields::FieldKind;

typed_record! {
    /// Raw payload the remote system returned for one of its endpoints
    pub struct RemoteData {
        "path" => path: String = FieldKind::String,
        "data" => data: Value = FieldKind::Json,
    }
}

typed_record! {
    /// A remote-system field that has no normalized counterpart
    pub struct RemoteField {
        "remote_field_class" => remote_field_class: Value = FieldKind::Json,
        "value" => value: Value = FieldKind::Json,
    }
}

typed_record! {
    pub struct Address {
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "type" => address_type: AddressType = FieldKind::Enum(AddressType::VALUES),
        "street_1" => street_1: String = FieldKind::String,
        "street_2" => street_2: String = FieldKind::String,
        "city" => city: String = FieldKind::String,
        "state" => state: Value = FieldKind::Json,
        "country_subdivision" => country_subdivision: String = FieldKind::String,
        "country" => country: String = FieldKind::String,
        "zip_code" => zip_code: String = FieldKind::String,
    }
}

typed_record! {
    pub struct AccountingPhoneNumber {
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "number" => number: String = FieldKind::String,
        "type" => phone_type: String = FieldKind::String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nullable::Nullable;
    use crate::record::TypedRecord;
    use serde_json::json;

    #[test]
    fn test_address_type_key_maps_to_field() {
        let address = Address::from_json(r#"{"type":"BILLING","city":"Lisbon","state":"Lisboa"}"#).unwrap();

        assert_eq!(address.address_type, Nullable::Set(AddressType::Billing));
        assert_eq!(address.city.get().map(String::as_str), Some("Lisbon"));
        assert_eq!(address.state, Nullable::Set(json!("Lisboa")));
        assert!(address.additional_properties.is_empty());
    }

    #[test]
    fn test_remote_data_keeps_arbitrary_payload() {
        let raw = json!({ "path": "/accounts", "data": { "Id": 7, "Nested": [1, 2] } });
        let remote = RemoteData::from_value(raw.clone()).unwrap();

        assert_eq!(remote.to_value().unwrap(), raw);
    }

    #[test]
    fn test_phone_number_validates_type_as_string() {
        let err = AccountingPhoneNumber::validate_raw(&json!({ "type": 5 })).unwrap_err();
        let validation = err.as_validation().unwrap();
        assert_eq!(validation.field, "type");
        assert_eq!(validation.context, "AccountingPhoneNumber");
    }
}
