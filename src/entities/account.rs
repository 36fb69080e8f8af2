// 💳 Account - a ledger account in the chart of accounts
//
// `id` is assigned by Merge, `remote_id` by the accounting system the
// account was synced from. Balances are reported, never computed here.

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Number, Value};

use crate::entities::common::RemoteData;
use crate::enums::{AccountClassification, AccountStatus, AccountType, CurrencyCode};
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    /// Account as returned by the API
    pub struct Account {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "name" => name: String = FieldKind::String,
        "description" => description: String = FieldKind::String,
        /// Top-level bucket: asset, equity, expense, liability or revenue
        "classification" => classification: AccountClassification =
            FieldKind::Enum(AccountClassification::VALUES),
        /// Free-text type as named by the remote system
        "type" => remote_type: String = FieldKind::String,
        "account_type" => account_type: AccountType = FieldKind::Enum(AccountType::VALUES),
        "status" => status: AccountStatus = FieldKind::Enum(AccountStatus::VALUES),
        "current_balance" => current_balance: Number = FieldKind::Number,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "account_number" => account_number: String = FieldKind::String,
        "parent_account" => parent_account: String = FieldKind::String,
        "company" => company: String = FieldKind::String,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
    }
}

typed_record! {
    /// Payload for creating an account
    pub struct AccountRequest {
        "name" => name: String = FieldKind::String,
        "description" => description: String = FieldKind::String,
        "classification" => classification: AccountClassification =
            FieldKind::Enum(AccountClassification::VALUES),
        "type" => remote_type: String = FieldKind::String,
        "account_type" => account_type: AccountType = FieldKind::Enum(AccountType::VALUES),
        "status" => status: AccountStatus = FieldKind::Enum(AccountStatus::VALUES),
        "current_balance" => current_balance: Number = FieldKind::Number,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "account_number" => account_number: String = FieldKind::String,
        "parent_account" => parent_account: String = FieldKind::String,
        "company" => company: String = FieldKind::String,
        "integration_params" => integration_params: Map<String, Value> = FieldKind::Object,
        "linked_account_params" => linked_account_params: Map<String, Value> = FieldKind::Object,
    }
}

impl Account {
    /// Whether the remote system reported this account as deleted
    pub fn is_remotely_deleted(&self) -> bool {
        self.remote_was_deleted.get().copied().unwrap_or(false)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nullable::Nullable;
    use crate::record::TypedRecord;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const CASH: &str = r#"{"id":"acc-1","name":"Cash","classification":"ASSET","status":"ACTIVE","current_balance":100.5,"currency":"USD"}"#;

    #[test]
    fn test_account_decode() {
        let account = Account::from_json(CASH).unwrap();

        assert_eq!(account.id.get().map(String::as_str), Some("acc-1"));
        assert_eq!(account.name.get().map(String::as_str), Some("Cash"));
        assert_eq!(account.classification, Nullable::Set(AccountClassification::Asset));
        assert_eq!(account.status, Nullable::Set(AccountStatus::Active));
        assert_eq!(account.current_balance.get().and_then(Number::as_f64), Some(100.5));
        assert_eq!(account.currency, Nullable::Set(CurrencyCode::Usd));
        assert!(account.description.is_omitted());
        assert!(account.remote_data.is_omitted());
    }

    #[test]
    fn test_account_encode_emits_only_set_fields() {
        let account = Account::from_json(CASH).unwrap();
        let encoded: Value = serde_json::from_str(&account.to_json().unwrap()).unwrap();

        let expected: Value = serde_json::from_str(CASH).unwrap();
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_account_built_from_named_fields() {
        let account = Account {
            name: "Petty Cash".to_string().into(),
            current_balance: Number::from(12).into(),
            classification: AccountClassification::Asset.into(),
            description: Nullable::Null,
            ..Account::default()
        };

        assert_eq!(
            account.to_value().unwrap(),
            json!({
                "name": "Petty Cash",
                "description": null,
                "classification": "ASSET",
                "current_balance": 12,
            })
        );
        assert!(account.validate().is_ok());
    }

    #[test]
    fn test_account_remote_type_uses_type_key() {
        let account = Account::from_json(r#"{"type":"Bank"}"#).unwrap();
        assert_eq!(account.remote_type.get().map(String::as_str), Some("Bank"));
        assert!(account.additional_properties.is_empty());
    }

    #[test]
    fn test_account_deleted_flag() {
        let deleted = Account::from_json(r#"{"remote_was_deleted":true}"#).unwrap();
        assert!(deleted.is_remotely_deleted());
        assert!(!Account::new().is_remotely_deleted());
    }

    #[test]
    fn test_account_request_unknown_status_fails_validation() {
        let request = AccountRequest::from_json(r#"{"name":"Fees","status":"FROZEN"}"#).unwrap();
        assert_eq!(request.status, Nullable::Set(AccountStatus::Unrecognized("FROZEN".to_string())));

        let err = request.validate().unwrap_err();
        let validation = err.as_validation().unwrap();
        assert_eq!(validation.field, "status");
        assert_eq!(validation.context, "AccountRequest");
    }
}
