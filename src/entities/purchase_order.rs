// 📦 PurchaseOrder - order placed with a vendor ahead of billing

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Number, Value};

use crate::entities::account::Account;
use crate::entities::common::{Address, RemoteData, RemoteField};
use crate::entities::contact::Contact;
use crate::entities::item::Item;
use crate::enums::{CurrencyCode, PurchaseOrderStatus};
use crate::expandable::Expandable;
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    pub struct PurchaseOrder {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "status" => status: PurchaseOrderStatus = FieldKind::Enum(PurchaseOrderStatus::VALUES),
        "issue_date" => issue_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "delivery_date" => delivery_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "delivery_address" => delivery_address: Address = FieldKind::Record(Address::schema),
        "customer" => customer: String = FieldKind::String,
        "vendor" => vendor: Expandable<Contact> = FieldKind::Expandable(Contact::schema),
        "memo" => memo: String = FieldKind::String,
        "company" => company: String = FieldKind::String,
        "total_amount" => total_amount: Number = FieldKind::Number,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "exchange_rate" => exchange_rate: String = FieldKind::String,
        "line_items" => line_items: Vec<PurchaseOrderLineItem> =
            FieldKind::List(ItemKind::Record(PurchaseOrderLineItem::schema)),
        "tracking_categories" => tracking_categories: Vec<String> = FieldKind::List(ItemKind::String),
        "accounting_period" => accounting_period: String = FieldKind::String,
        "remote_created_at" => remote_created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "remote_updated_at" => remote_updated_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
        "remote_fields" => remote_fields: Vec<RemoteField> =
            FieldKind::List(ItemKind::Record(RemoteField::schema)),
    }
}

typed_record! {
    pub struct PurchaseOrderLineItem {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "description" => description: String = FieldKind::String,
        "unit_price" => unit_price: Number = FieldKind::Number,
        "quantity" => quantity: Number = FieldKind::Number,
        "item" => item: Expandable<Item> = FieldKind::Expandable(Item::schema),
        "account" => account: Expandable<Account> = FieldKind::Expandable(Account::schema),
        "tracking_category" => tracking_category: String = FieldKind::String,
        "tracking_categories" => tracking_categories: Vec<String> = FieldKind::List(ItemKind::String),
        "tax_amount" => tax_amount: String = FieldKind::String,
        "total_line_amount" => total_line_amount: String = FieldKind::String,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "exchange_rate" => exchange_rate: String = FieldKind::String,
        "company" => company: String = FieldKind::String,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
    }
}

impl PurchaseOrder {
    pub fn is_open(&self) -> bool {
        matches!(
            self.status.get(),
            Some(PurchaseOrderStatus::Draft | PurchaseOrderStatus::Submitted | PurchaseOrderStatus::Authorized)
        )
    }
}
