// 📒 JournalEntry - manual double-entry posting
//
// Lines are taken as reported; debits and credits are not required to net
// to zero at this layer.

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Number, Value};

use crate::entities::account::Account;
use crate::entities::common::RemoteData;
use crate::enums::{CurrencyCode, PostingStatus};
use crate::expandable::Expandable;
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    pub struct JournalEntry {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "transaction_date" => transaction_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "remote_created_at" => remote_created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "remote_updated_at" => remote_updated_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "payments" => payments: Vec<String> = FieldKind::List(ItemKind::String),
        "applied_payments" => applied_payments: Vec<String> = FieldKind::List(ItemKind::String),
        "memo" => memo: String = FieldKind::String,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "exchange_rate" => exchange_rate: String = FieldKind::String,
        "company" => company: String = FieldKind::String,
        "inclusive_of_tax" => inclusive_of_tax: bool = FieldKind::Boolean,
        "lines" => lines: Vec<JournalLine> = FieldKind::List(ItemKind::Record(JournalLine::schema)),
        "journal_number" => journal_number: String = FieldKind::String,
        "tracking_categories" => tracking_categories: Vec<String> = FieldKind::List(ItemKind::String),
        "posting_status" => posting_status: PostingStatus = FieldKind::Enum(PostingStatus::VALUES),
        "accounting_period" => accounting_period: String = FieldKind::String,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
    }
}

typed_record! {
    pub struct JournalLine {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "account" => account: Expandable<Account> = FieldKind::Expandable(Account::schema),
        /// Positive for debits, negative for credits
        "net_amount" => net_amount: Number = FieldKind::Number,
        "tracking_category" => tracking_category: String = FieldKind::String,
        "tracking_categories" => tracking_categories: Vec<String> = FieldKind::List(ItemKind::String),
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "company" => company: String = FieldKind::String,
        "employee" => employee: String = FieldKind::String,
        "contact" => contact: String = FieldKind::String,
        "exchange_rate" => exchange_rate: String = FieldKind::String,
        "description" => description: String = FieldKind::String,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
    }
}
