// Entity Models - Merge Accounting resources
//
// Each record is declared once with `typed_record!`:
// - Every field optional (`Nullable`) unless listed under `required`
// - Related records either as an id or expanded inline (`Expandable`)
// - Unknown keys preserved in `additional_properties`

pub mod common;
pub mod account;
pub mod accounting_period;
pub mod company;
pub mod contact;
pub mod item;
pub mod payment;
pub mod invoice;
pub mod expense;
pub mod expense_report;
pub mod journal_entry;
pub mod general_ledger;
pub mod purchase_order;
pub mod reports;
pub mod tax_rate;
pub mod tracking_category;

pub use common::{AccountingPhoneNumber, Address, RemoteData, RemoteField};
pub use account::{Account, AccountRequest};
pub use accounting_period::AccountingPeriod;
pub use company::CompanyInfo;
pub use contact::Contact;
pub use item::Item;
pub use payment::{Payment, PaymentLineItem};
pub use invoice::{Invoice, InvoiceLineItem};
pub use expense::{Expense, ExpenseLine};
pub use expense_report::{ExpenseReport, ExpenseReportLine, ExpenseReportRequest};
pub use journal_entry::{JournalEntry, JournalLine};
pub use general_ledger::{GeneralLedgerTransaction, GeneralLedgerTransactionLine};
pub use purchase_order::{PurchaseOrder, PurchaseOrderLineItem};
pub use reports::{BalanceSheet, IncomeStatement, ReportItem};
pub use tax_rate::TaxRate;
pub use tracking_category::TrackingCategory;
