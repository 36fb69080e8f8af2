// 📦 Item - a product or service that can be bought or sold

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Number, Value};

use crate::entities::common::RemoteData;
use crate::enums::ActivityStatus;
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    pub struct Item {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "name" => name: String = FieldKind::String,
        "status" => status: ActivityStatus = FieldKind::Enum(ActivityStatus::VALUES),
        "unit_price" => unit_price: Number = FieldKind::Number,
        "purchase_price" => purchase_price: Number = FieldKind::Number,
        "purchase_account" => purchase_account: String = FieldKind::String,
        "sales_account" => sales_account: String = FieldKind::String,
        "company" => company: String = FieldKind::String,
        "remote_updated_at" => remote_updated_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
    }
}
