// 💸 Payment - money received from a customer or paid to a supplier

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Number, Value};

use crate::entities::account::Account;
use crate::entities::common::RemoteData;
use crate::entities::contact::Contact;
use crate::enums::{CurrencyCode, PaymentType};
use crate::expandable::Expandable;
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    pub struct Payment {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "transaction_date" => transaction_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "contact" => contact: Expandable<Contact> = FieldKind::Expandable(Contact::schema),
        "account" => account: Expandable<Account> = FieldKind::Expandable(Account::schema),
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "exchange_rate" => exchange_rate: String = FieldKind::String,
        "company" => company: String = FieldKind::String,
        "total_amount" => total_amount: Number = FieldKind::Number,
        "type" => payment_type: PaymentType = FieldKind::Enum(PaymentType::VALUES),
        "tracking_categories" => tracking_categories: Vec<String> = FieldKind::List(ItemKind::String),
        "accounting_period" => accounting_period: String = FieldKind::String,
        "applied_to_lines" => applied_to_lines: Vec<PaymentLineItem> =
            FieldKind::List(ItemKind::Record(PaymentLineItem::schema)),
        "remote_updated_at" => remote_updated_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
    }
}

typed_record! {
    /// Portion of a payment applied to one invoice, credit note or journal entry
    pub struct PaymentLineItem {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        /// Decimal string as sent by the API
        "applied_amount" => applied_amount: String = FieldKind::String,
        "applied_date" => applied_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "related_object_id" => related_object_id: String = FieldKind::String,
        "related_object_type" => related_object_type: String = FieldKind::String,
    }
}
