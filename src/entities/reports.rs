// 📊 Financial reports - balance sheet and income statement snapshots
//
// Report lines nest arbitrarily deep through `sub_items`.

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Number, Value};

use crate::entities::common::RemoteData;
use crate::enums::CurrencyCode;
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    pub struct ReportItem {
        "remote_id" => remote_id: String = FieldKind::String,
        "name" => name: String = FieldKind::String,
        "value" => value: Number = FieldKind::Number,
        "sub_items" => sub_items: Vec<ReportItem> = FieldKind::List(ItemKind::Record(ReportItem::schema)),
        "company" => company: String = FieldKind::String,
    }
}

impl ReportItem {
    /// Number of items in this subtree, including `self`
    pub fn subtree_len(&self) -> usize {
        1 + self
            .sub_items
            .get()
            .map(|items| items.iter().map(ReportItem::subtree_len).sum())
            .unwrap_or(0)
    }
}

typed_record! {
    pub struct BalanceSheet {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "name" => name: String = FieldKind::String,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "company" => company: String = FieldKind::String,
        "date" => date: DateTime<FixedOffset> = FieldKind::DateTime,
        "net_assets" => net_assets: Number = FieldKind::Number,
        "assets" => assets: Vec<ReportItem> = FieldKind::List(ItemKind::Record(ReportItem::schema)),
        "liabilities" => liabilities: Vec<ReportItem> = FieldKind::List(ItemKind::Record(ReportItem::schema)),
        "equity" => equity: Vec<ReportItem> = FieldKind::List(ItemKind::Record(ReportItem::schema)),
        "remote_generated_at" => remote_generated_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
    }
}

typed_record! {
    pub struct IncomeStatement {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "name" => name: String = FieldKind::String,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "company" => company: String = FieldKind::String,
        "start_period" => start_period: DateTime<FixedOffset> = FieldKind::DateTime,
        "end_period" => end_period: DateTime<FixedOffset> = FieldKind::DateTime,
        "income" => income: Vec<ReportItem> = FieldKind::List(ItemKind::Record(ReportItem::schema)),
        "cost_of_sales" => cost_of_sales: Vec<ReportItem> =
            FieldKind::List(ItemKind::Record(ReportItem::schema)),
        "gross_profit" => gross_profit: Number = FieldKind::Number,
        "operating_expenses" => operating_expenses: Vec<ReportItem> =
            FieldKind::List(ItemKind::Record(ReportItem::schema)),
        "net_operating_income" => net_operating_income: Number = FieldKind::Number,
        "non_operating_expenses" => non_operating_expenses: Vec<ReportItem> =
            FieldKind::List(ItemKind::Record(ReportItem::schema)),
        "net_income" => net_income: Number = FieldKind::Number,
        "remote_generated_at" => remote_generated_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
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
    use crate::schema::SchemaValidator;
    use serde_json::json;

    fn nested_assets() -> Value {
        json!({
            "currency": "USD",
            "net_assets": 1500.0,
            "assets": [{
                "name": "Current Assets",
                "value": 1500.0,
                "sub_items": [
                    { "name": "Cash", "value": 1000.0, "sub_items": [] },
                    { "name": "Receivables", "value": 500.0 }
                ]
            }]
        })
    }

    #[test]
    fn test_balance_sheet_nested_items() {
        let sheet = BalanceSheet::from_value(nested_assets()).unwrap();

        let top = &sheet.assets.get().unwrap()[0];
        assert_eq!(top.subtree_len(), 3);
        let cash = &top.sub_items.get().unwrap()[0];
        assert_eq!(cash.name.get().map(String::as_str), Some("Cash"));
        assert_eq!(cash.sub_items, Nullable::Set(vec![]));
        assert_eq!(sheet.to_value().unwrap(), nested_assets());
    }

    #[test]
    fn test_deep_validation_reaches_nested_items() {
        let raw = json!({
            "assets": [{ "name": "Current", "sub_items": [{ "name": "Cash", "value": "lots" }] }]
        });
        assert!(BalanceSheet::validate_raw(&raw).is_ok());

        let validator = SchemaValidator::new().with_deep_lists(true);
        let err = BalanceSheet::validate_raw_with(&validator, &raw).unwrap_err();
        let validation = err.as_validation().unwrap();
        assert_eq!(validation.field, "assets[0].sub_items[0].value");
        assert_eq!(validation.context, "ReportItem");
    }

    #[test]
    fn test_income_statement_periods() {
        let statement = IncomeStatement::from_json(
            r#"{"start_period":"2024-01-01T00:00:00Z","end_period":"2024-03-31T23:59:59Z","net_income":12.5}"#,
        )
        .unwrap();

        let start = statement.start_period.get().unwrap();
        let end = statement.end_period.get().unwrap();
        assert!(start < end);
        assert_eq!(statement.net_income.get().and_then(Number::as_f64), Some(12.5));
    }
}
