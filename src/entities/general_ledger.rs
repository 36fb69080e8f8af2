// 📚 GeneralLedgerTransaction - ledger postings generated by an underlying document

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use crate::entities::account::Account;
use crate::entities::common::RemoteData;
use crate::entities::contact::Contact;
use crate::entities::item::Item;
use crate::enums::{CurrencyCode, UnderlyingTransactionType};
use crate::expandable::Expandable;
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    pub struct GeneralLedgerTransaction {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "underlying_transaction_remote_id" => underlying_transaction_remote_id: String =
            FieldKind::String,
        "underlying_transaction_type" => underlying_transaction_type: UnderlyingTransactionType =
            FieldKind::Enum(UnderlyingTransactionType::VALUES),
        "accounting_period" => accounting_period: String = FieldKind::String,
        "company" => company: String = FieldKind::String,
        "remote_updated_at" => remote_updated_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "remote_created_at" => remote_created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "tracking_categories" => tracking_categories: Vec<String> = FieldKind::List(ItemKind::String),
        "posting_date" => posting_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "general_ledger_transaction_lines" => general_ledger_transaction_lines:
            Vec<GeneralLedgerTransactionLine> =
            FieldKind::List(ItemKind::Record(GeneralLedgerTransactionLine::schema)),
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
    }
}

typed_record! {
    pub struct GeneralLedgerTransactionLine {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "account" => account: Expandable<Account> = FieldKind::Expandable(Account::schema),
        "company" => company: String = FieldKind::String,
        "employee" => employee: String = FieldKind::String,
        "contact" => contact: Expandable<Contact> = FieldKind::Expandable(Contact::schema),
        "base_currency" => base_currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "transaction_currency" => transaction_currency: CurrencyCode =
            FieldKind::Enum(CurrencyCode::VALUES),
        "exchange_rate" => exchange_rate: String = FieldKind::String,
        "description" => description: String = FieldKind::String,
        "tracking_categories" => tracking_categories: Vec<String> = FieldKind::List(ItemKind::String),
        /// Decimal strings as sent by the API
        "debit_amount" => debit_amount: String = FieldKind::String,
        "credit_amount" => credit_amount: String = FieldKind::String,
        "item" => item: Expandable<Item> = FieldKind::Expandable(Item::schema),
        "foreign_debit_amount" => foreign_debit_amount: String = FieldKind::String,
        "foreign_credit_amount" => foreign_credit_amount: String = FieldKind::String,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nullable::Nullable;
    use crate::record::TypedRecord;
    use serde_json::json;

    #[test]
    fn test_ledger_transaction_lines() {
        let txn = GeneralLedgerTransaction::from_value(json!({
            "underlying_transaction_type": "VENDOR_CREDIT",
            "posting_date": "2024-01-31T00:00:00Z",
            "general_ledger_transaction_lines": [
                { "debit_amount": "120.00", "credit_amount": "0", "base_currency": "EUR" }
            ]
        }))
        .unwrap();

        assert_eq!(
            txn.underlying_transaction_type,
            Nullable::Set(UnderlyingTransactionType::VendorCredit)
        );
        let line = &txn.general_ledger_transaction_lines.get().unwrap()[0];
        assert_eq!(line.base_currency, Nullable::Set(CurrencyCode::Eur));
        assert_eq!(line.debit_amount.get().map(String::as_str), Some("120.00"));
    }

    #[test]
    fn test_ledger_lines_checked_shallowly_by_default() {
        let raw = json!({ "general_ledger_transaction_lines": [{ "debit_amount": 5 }] });
        assert!(GeneralLedgerTransaction::validate_raw(&raw).is_ok());
    }
}
