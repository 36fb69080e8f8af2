// 🧾 Invoice - receivable (sent to a customer) or payable (bill from a supplier)
//
// Totals are reported by the remote system as-is. Nothing here checks that
// sub_total + total_tax_amount equals total_amount.

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Number, Value};

use crate::entities::account::Account;
use crate::entities::common::{RemoteData, RemoteField};
use crate::entities::company::CompanyInfo;
use crate::entities::contact::Contact;
use crate::entities::item::Item;
use crate::entities::payment::Payment;
use crate::enums::{CurrencyCode, InvoiceStatus, InvoiceType};
use crate::expandable::Expandable;
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    pub struct Invoice {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "type" => invoice_type: InvoiceType = FieldKind::Enum(InvoiceType::VALUES),
        "contact" => contact: Expandable<Contact> = FieldKind::Expandable(Contact::schema),
        "number" => number: String = FieldKind::String,
        "issue_date" => issue_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "due_date" => due_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "paid_on_date" => paid_on_date: DateTime<FixedOffset> = FieldKind::DateTime,
        "memo" => memo: String = FieldKind::String,
        "company" => company: Expandable<CompanyInfo> = FieldKind::Expandable(CompanyInfo::schema),
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        /// Decimal string, e.g. `"2.0"`
        "exchange_rate" => exchange_rate: String = FieldKind::String,
        "total_discount" => total_discount: Number = FieldKind::Number,
        "sub_total" => sub_total: Number = FieldKind::Number,
        "status" => status: InvoiceStatus = FieldKind::Enum(InvoiceStatus::VALUES),
        "total_tax_amount" => total_tax_amount: Number = FieldKind::Number,
        "total_amount" => total_amount: Number = FieldKind::Number,
        "balance" => balance: Number = FieldKind::Number,
        "remote_updated_at" => remote_updated_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "tracking_categories" => tracking_categories: Vec<String> = FieldKind::List(ItemKind::String),
        "accounting_period" => accounting_period: String = FieldKind::String,
        "purchase_orders" => purchase_orders: Vec<String> = FieldKind::List(ItemKind::String),
        "payments" => payments: Vec<Expandable<Payment>> =
            FieldKind::List(ItemKind::Expandable(Payment::schema)),
        "line_items" => line_items: Vec<InvoiceLineItem> =
            FieldKind::List(ItemKind::Record(InvoiceLineItem::schema)),
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
        "remote_fields" => remote_fields: Vec<RemoteField> =
            FieldKind::List(ItemKind::Record(RemoteField::schema)),
    }
}

typed_record! {
    pub struct InvoiceLineItem {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "description" => description: String = FieldKind::String,
        "unit_price" => unit_price: Number = FieldKind::Number,
        "quantity" => quantity: Number = FieldKind::Number,
        "total_amount" => total_amount: Number = FieldKind::Number,
        "currency" => currency: CurrencyCode = FieldKind::Enum(CurrencyCode::VALUES),
        "exchange_rate" => exchange_rate: String = FieldKind::String,
        "item" => item: Expandable<Item> = FieldKind::Expandable(Item::schema),
        "account" => account: Expandable<Account> = FieldKind::Expandable(Account::schema),
        "tracking_category" => tracking_category: String = FieldKind::String,
        "tracking_categories" => tracking_categories: Vec<String> = FieldKind::List(ItemKind::String),
        "company" => company: String = FieldKind::String,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
    }
}

impl Invoice {
    pub fn is_receivable(&self) -> bool {
        matches!(self.invoice_type.get(), Some(InvoiceType::AccountsReceivable))
    }

    /// Embedded line items, empty when the field is unset
    pub fn lines(&self) -> &[InvoiceLineItem] {
        self.line_items.get().map(Vec::as_slice).unwrap_or(&[])
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
    use serde_json::json;

    #[test]
    fn test_invoice_expanded_contact() {
        let raw = json!({
            "type": "ACCOUNTS_RECEIVABLE",
            "contact": { "id": "c-1", "name": "Acme", "is_customer": true },
            "company": "co-9",
            "line_items": [
                { "description": "Consulting", "quantity": 2, "unit_price": 50.0, "account": "acc-4" }
            ]
        });
        let invoice = Invoice::from_value(raw).unwrap();

        let contact = invoice.contact.get().and_then(Expandable::expanded).unwrap();
        assert_eq!(contact.name.get().map(String::as_str), Some("Acme"));
        assert_eq!(invoice.company.get().and_then(Expandable::as_id), Some("co-9"));
        assert!(invoice.is_receivable());

        let line = &invoice.lines()[0];
        assert_eq!(line.quantity, Nullable::Set(Number::from(2)));
        assert_eq!(line.account.get().and_then(Expandable::as_id), Some("acc-4"));
    }

    #[test]
    fn test_invoice_totals_not_cross_checked() {
        let raw = r#"{"sub_total":100,"total_tax_amount":10,"total_amount":999}"#;
        let invoice = Invoice::from_json(raw).unwrap();

        assert_eq!(invoice.total_amount, Nullable::Set(Number::from(999)));
        assert_eq!(invoice.to_json().unwrap(), raw);
        assert!(invoice.validate().is_ok());
    }

    #[test]
    fn test_invoice_payments_mix_ids_and_objects() {
        let raw = json!({ "payments": ["pay-1", { "id": "pay-2", "total_amount": 10.5 }] });
        let invoice = Invoice::from_value(raw.clone()).unwrap();

        let payments = invoice.payments.get().unwrap();
        assert_eq!(payments[0].as_id(), Some("pay-1"));
        assert!(payments[1].is_expanded());
        assert_eq!(invoice.to_value().unwrap(), raw);
    }

    #[test]
    fn test_invoice_nested_contact_validation() {
        let candidate = json!({ "contact": { "name": "Acme", "status": "GONE" } });
        let err = Invoice::validate_raw(&candidate).unwrap_err();

        let validation = err.as_validation().unwrap();
        assert_eq!(validation.field, "contact.status");
        assert_eq!(validation.context, "Contact");
    }

    #[test]
    fn test_invoice_without_lines() {
        assert!(Invoice::new().lines().is_empty());
    }
}
