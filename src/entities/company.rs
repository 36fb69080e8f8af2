// 🏢 CompanyInfo - the legal entity whose books are synced

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use crate::entities::common::{AccountingPhoneNumber, Address, RemoteData};
use crate::enums::CurrencyCode;
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    pub struct CompanyInfo {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "name" => name: String = FieldKind::String,
        "legal_name" => legal_name: String = FieldKind::String,
        "tax_number" => tax_number: String = FieldKind::String,
        /// 1 through 12
        "fiscal_year_end_month" => fiscal_year_end_month: i64 = FieldKind::Integer,
        "fiscal_year_end_day" => fiscal_year_end_day: i64 = FieldKind::Integer,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "remote_created_at" => remote_created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "urls" => urls: Vec<String> = FieldKind::List(ItemKind::String),
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
    use crate::nullable::Nullable;
    use crate::record::TypedRecord;
    use serde_json::json;

    #[test]
    fn test_company_fiscal_year_end() {
        let company = CompanyInfo::from_json(
            r#"{"name":"Acme Ltd","fiscal_year_end_month":3,"fiscal_year_end_day":31,"urls":["https://acme.test"]}"#,
        )
        .unwrap();

        assert_eq!(company.fiscal_year_end_month, Nullable::Set(3));
        assert_eq!(company.fiscal_year_end_day, Nullable::Set(31));
        assert_eq!(company.urls.get().map(Vec::len), Some(1));
    }

    #[test]
    fn test_company_month_must_be_integer() {
        let err = CompanyInfo::validate_raw(&json!({ "fiscal_year_end_month": "March" })).unwrap_err();
        let validation = err.as_validation().unwrap();
        assert_eq!(validation.field, "fiscal_year_end_month");
        assert_eq!(validation.message, "expected integer, found string");
    }
}
