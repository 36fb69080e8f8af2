// 👤 Contact - customer or supplier

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use crate::entities::common::{AccountingPhoneNumber, Address, RemoteData};
use crate::enums::ActivityStatus;
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    /// A customer, a supplier, or both
    pub struct Contact {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "name" => name: String = FieldKind::String,
        "is_supplier" => is_supplier: bool = FieldKind::Boolean,
        "is_customer" => is_customer: bool = FieldKind::Boolean,
        "email_address" => email_address: String = FieldKind::String,
        "tax_number" => tax_number: String = FieldKind::String,
        "status" => status: ActivityStatus = FieldKind::Enum(ActivityStatus::VALUES),
        "currency" => currency: String = FieldKind::String,
        "remote_updated_at" => remote_updated_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "company" => company: String = FieldKind::String,
        "addresses" => addresses: Vec<Address> = FieldKind::List(ItemKind::Record(Address::schema)),
        "phone_numbers" => phone_numbers: Vec<AccountingPhoneNumber> =
            FieldKind::List(ItemKind::Record(AccountingPhoneNumber::schema)),
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::AddressType;
    use crate::nullable::Nullable;
    use crate::record::TypedRecord;
    use serde_json::json;

    #[test]
    fn test_contact_nested_addresses() {
        let raw = json!({
            "name": "Acme Supplies",
            "is_supplier": true,
            "addresses": [
                { "type": "BILLING", "city": "Austin", "zip_code": "73301" },
                { "type": "SHIPPING", "city": "Dallas" }
            ],
            "remote_updated_at": "2024-02-01T12:00:00Z"
        });
        let contact = Contact::from_value(raw).unwrap();

        let addresses = contact.addresses.get().unwrap();
        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0].address_type, Nullable::Set(AddressType::Billing));
        assert_eq!(addresses[1].city.get().map(String::as_str), Some("Dallas"));
        assert_eq!(contact.is_supplier, Nullable::Set(true));
        assert!(contact.is_customer.is_omitted());
    }

    #[test]
    fn test_contact_bad_nested_date_fails_decode() {
        let raw = r#"{"addresses":[{"created_at":"last tuesday"}]}"#;
        assert!(Contact::from_json(raw).is_err());
    }

    #[test]
    fn test_contact_addresses_validated_shallowly() {
        let candidate = json!({ "addresses": [{ "city": 42 }] });
        assert!(Contact::validate_raw(&candidate).is_ok());

        let candidate = json!({ "addresses": { "city": "Austin" } });
        let err = Contact::validate_raw(&candidate).unwrap_err();
        assert_eq!(err.as_validation().unwrap().field, "addresses");
    }
}
