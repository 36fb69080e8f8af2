// 🗂️ ExpenseReport - employee expense claim moving through approval

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Number, Value};

use crate::entities::account::Account;
use crate::entities::common::RemoteData;
use crate::enums::{CurrencyCode, ExpenseReportStatus};
use crate::expandable::Expandable;
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    pub struct ExpenseReport {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "report_date" => report_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "report_identifier" => report_identifier: String = FieldKind::String,
        "employee" => employee: String = FieldKind::String,
        "status" => status: ExpenseReportStatus = FieldKind::Enum(ExpenseReportStatus::VALUES),
        "total_amount" => total_amount: Number = FieldKind::Number,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "description" => description: String = FieldKind::String,
        "lines" => lines: Vec<ExpenseReportLine> =
            FieldKind::List(ItemKind::Record(ExpenseReportLine::schema)),
        "company" => company: String = FieldKind::String,
        "accounting_period" => accounting_period: String = FieldKind::String,
        "tracking_categories" => tracking_categories: Vec<String> = FieldKind::List(ItemKind::String),
        "remote_created_at" => remote_created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "remote_updated_at" => remote_updated_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
    }
}

typed_record! {
    pub struct ExpenseReportLine {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "amount" => amount: Number = FieldKind::Number,
        "description" => description: String = FieldKind::String,
        "expense_date" => expense_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "account" => account: Expandable<Account> = FieldKind::Expandable(Account::schema),
        "contact" => contact: String = FieldKind::String,
        "tracking_categories" => tracking_categories: Vec<String> = FieldKind::List(ItemKind::String),
        "company" => company: String = FieldKind::String,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "exchange_rate" => exchange_rate: String = FieldKind::String,
        "is_billable" => is_billable: bool = FieldKind::Boolean,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
    }
}

typed_record! {
    /// Payload for creating an expense report
    pub struct ExpenseReportRequest {
        required {
            "tracking_categories" => tracking_categories: Vec<String> =
                FieldKind::List(ItemKind::String),
        }
        "report_date" => report_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "report_identifier" => report_identifier: String = FieldKind::String,
        "employee" => employee: String = FieldKind::String,
        "status" => status: ExpenseReportStatus = FieldKind::Enum(ExpenseReportStatus::VALUES),
        "total_amount" => total_amount: Number = FieldKind::Number,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "description" => description: String = FieldKind::String,
        "lines" => lines: Vec<ExpenseReportLine> =
            FieldKind::List(ItemKind::Record(ExpenseReportLine::schema)),
        "company" => company: String = FieldKind::String,
        "accounting_period" => accounting_period: String = FieldKind::String,
        "integration_params" => integration_params: Map<String, Value> = FieldKind::Object,
        "linked_account_params" => linked_account_params: Map<String, Value> = FieldKind::Object,
    }
}

impl ExpenseReport {
    /// Sum of line amounts, ignoring lines without an amount
    pub fn line_total(&self) -> f64 {
        self.lines
            .get()
            .map(|lines| lines.iter().filter_map(|line| line.amount.get().and_then(Number::as_f64)).sum())
            .unwrap_or(0.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================
