// 🗓️ AccountingPeriod

use chrono::{DateTime, FixedOffset, TimeZone};
use serde_json::{Map, Value};

use crate::enums::AccountingPeriodStatus;
use crate::fields::FieldKind;

typed_record! {
    pub struct AccountingPeriod {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "name" => name: String = FieldKind::String,
        "status" => status: AccountingPeriodStatus = FieldKind::Enum(AccountingPeriodStatus::VALUES),
        "start_date" => start_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "end_date" => end_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
    }
}

impl AccountingPeriod {
    /// Whether `at` falls inside `[start_date, end_date]`. False when either bound is unset.
    pub fn contains<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> bool {
        match (self.start_date.get(), self.end_date.get()) {
            (Some(start), Some(end)) => start <= at && at <= end,
            _ => false,
        }
    }
}
