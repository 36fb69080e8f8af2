// 🧾 Expense - direct spend (card swipe, cash purchase) not billed through an invoice

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Number, Value};

use crate::entities::account::Account;
use crate::entities::common::RemoteData;
use crate::entities::contact::Contact;
use crate::enums::CurrencyCode;
use crate::expandable::Expandable;
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    pub struct Expense {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "transaction_date" => transaction_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "remote_created_at" => remote_created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "account" => account: Expandable<Account> = FieldKind::Expandable(Account::schema),
        "contact" => contact: Expandable<Contact> = FieldKind::Expandable(Contact::schema),
        "total_amount" => total_amount: Number = FieldKind::Number,
        "sub_total" => sub_total: Number = FieldKind::Number,
        "total_tax_amount" => total_tax_amount: Number = FieldKind::Number,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "exchange_rate" => exchange_rate: String = FieldKind::String,
        "inclusive_of_tax" => inclusive_of_tax: bool = FieldKind::Boolean,
        "company" => company: String = FieldKind::String,
        "employee" => employee: String = FieldKind::String,
        "memo" => memo: String = FieldKind::String,
        "lines" => lines: Vec<ExpenseLine> = FieldKind::List(ItemKind::Record(ExpenseLine::schema)),
        "tracking_categories" => tracking_categories: Vec<String> = FieldKind::List(ItemKind::String),
        "accounting_period" => accounting_period: String = FieldKind::String,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
    }
}

typed_record! {
    pub struct ExpenseLine {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "item" => item: String = FieldKind::String,
        "net_amount" => net_amount: Number = FieldKind::Number,
        "tracking_category" => tracking_category: String = FieldKind::String,
        "tracking_categories" => tracking_categories: Vec<String> = FieldKind::List(ItemKind::String),
        "company" => company: String = FieldKind::String,
        "employee" => employee: String = FieldKind::String,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "account" => account: Expandable<Account> = FieldKind::Expandable(Account::schema),
        "contact" => contact: String = FieldKind::String,
        "description" => description: String = FieldKind::String,
        "exchange_rate" => exchange_rate: String = FieldKind::String,
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
    fn test_expense_with_lines() {
        let expense = Expense::from_value(json!({
            "total_amount": 42.0,
            "currency": "GBP",
            "lines": [{ "net_amount": 35.0, "description": "Taxi" }]
        }))
        .unwrap();

        assert_eq!(expense.currency, Nullable::Set(CurrencyCode::Gbp));
        let line = &expense.lines.get().unwrap()[0];
        assert_eq!(line.description.get().map(String::as_str), Some("Taxi"));
    }

    #[test]
    fn test_expense_unknown_currency_is_lenient_then_rejected() {
        let expense = Expense::from_json(r#"{"currency":"XXQ"}"#).unwrap();
        assert_eq!(expense.currency, Nullable::Set(CurrencyCode::Unrecognized("XXQ".to_string())));

        let err = expense.validate().unwrap_err();
        assert_eq!(err.as_validation().unwrap().field, "currency");
    }
}
