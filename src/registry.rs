// 🗃️ Record Registry
// Name -> record lookup so raw payloads can be decoded and validated by type name

use std::collections::BTreeMap;

use serde_json::Value;

use crate::entities::*;
use crate::error::{Error, Result};
use crate::fields::{RecordSchema, SchemaFn};
use crate::record::TypedRecord;
use crate::schema::SchemaValidator;

// ============================================================================
// RECORD ENTRY
// ============================================================================

/// Type-erased handle on one record type
#[derive(Clone, Copy)]
struct RecordEntry {
    schema: SchemaFn,
    normalize: fn(&str) -> Result<Value>,
}

fn normalize_as<T: TypedRecord>(raw: &str) -> Result<Value> {
    T::from_json(raw)?.to_value()
}

// ============================================================================
// RECORD REGISTRY
// ============================================================================

/// RecordRegistry - Catalog of the resource records
///
/// Keyed by record name (`"Invoice"`, `"JournalLine"`, ...). Lookups try the
/// exact name first, then a case-insensitive match.
pub struct RecordRegistry {
    records: BTreeMap<&'static str, RecordEntry>,
}

impl RecordRegistry {
    /// Create a registry holding every resource record
    pub fn new() -> Self {
        let mut registry = RecordRegistry::empty();
        registry.register_core_records();
        registry
    }

    pub fn empty() -> Self {
        RecordRegistry {
            records: BTreeMap::new(),
        }
    }

    fn register_core_records(&mut self) {
        // ====================================================================
        // CHART OF ACCOUNTS & COMPANY
        // ====================================================================
        self.register::<Account>();
        self.register::<AccountRequest>();
        self.register::<AccountingPeriod>();
        self.register::<CompanyInfo>();
        self.register::<TaxRate>();
        self.register::<TrackingCategory>();

        // ====================================================================
        // COUNTERPARTIES & CATALOG
        // ====================================================================
        self.register::<Contact>();
        self.register::<Item>();

        // ====================================================================
        // TRANSACTIONS
        // ====================================================================
        self.register::<Invoice>();
        self.register::<InvoiceLineItem>();
        self.register::<Payment>();
        self.register::<PaymentLineItem>();
        self.register::<Expense>();
        self.register::<ExpenseLine>();
        self.register::<ExpenseReport>();
        self.register::<ExpenseReportLine>();
        self.register::<ExpenseReportRequest>();
        self.register::<JournalEntry>();
        self.register::<JournalLine>();
        self.register::<GeneralLedgerTransaction>();
        self.register::<GeneralLedgerTransactionLine>();
        self.register::<PurchaseOrder>();
        self.register::<PurchaseOrderLineItem>();

        // ====================================================================
        // REPORTS
        // ====================================================================
        self.register::<BalanceSheet>();
        self.register::<IncomeStatement>();
    }

    /// Register a record type under its schema name, replacing any previous entry
    pub fn register<T: TypedRecord>(&mut self) {
        let entry = RecordEntry {
            schema: T::schema,
            normalize: normalize_as::<T>,
        };
        self.records.insert(T::schema().name, entry);
    }

    fn entry(&self, name: &str) -> Result<&RecordEntry> {
        let found = self.records.get(name).or_else(|| {
            self.records
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, entry)| entry)
        });
        tracing::trace!(name, found = found.is_some(), "record lookup");
        found.ok_or_else(|| Error::UnknownRecord(name.to_string()))
    }

    /// Look up a record's schema by name
    pub fn get(&self, name: &str) -> Option<&'static RecordSchema> {
        self.entry(name).ok().map(|entry| (entry.schema)())
    }

    /// Registered record names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.records.keys().copied().collect()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Decode `raw` as the named record and re-encode it.
    ///
    /// The result carries declared fields in declaration order followed by
    /// unknown keys; values outside the declared set are not rejected.
    pub fn normalize(&self, name: &str, raw: &str) -> Result<Value> {
        let entry = self.entry(name)?;
        (entry.normalize)(raw)
    }

    /// Validate `candidate` against the named record's schema. Uses the default
    /// validator when none is given.
    pub fn validate_raw(&self, name: &str, candidate: &Value, validator: Option<&SchemaValidator>) -> Result<()> {
        let schema = (self.entry(name)?.schema)();
        let default_validator;
        let validator = match validator {
            Some(validator) => validator,
            None => {
                default_validator = SchemaValidator::new();
                &default_validator
            }
        };
        validator.validate(schema, candidate)?;
        Ok(())
    }
}

impl Default for RecordRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
