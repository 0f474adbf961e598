//! Editing session for one invoice.
//!
//! [`InvoiceForm`] owns the document under edit. Totals are never stored:
//! [`InvoiceForm::totals`] derives them from the current items each time.

use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;

use super::defaults::{default_item, draft_invoice};
use super::error::InvoiceError;
use super::types::*;
use super::validation::validate_document;

/// Stable handle for a line item within one form session.
///
/// Keys survive reordering caused by removals, unlike positions. They are a
/// UI concern only and never appear in the submitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(u64);

/// A single field edit on a line item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemField {
    Description(String),
    HsnCode(String),
    Quantity(Decimal),
    Rate(Decimal),
    TaxRate(Decimal),
}

#[derive(Debug, Clone)]
pub struct InvoiceForm {
    document: InvoiceDocument,
    keys: Vec<ItemKey>,
    next_key: u64,
}

impl InvoiceForm {
    /// Start editing an existing document.
    pub fn new(document: InvoiceDocument) -> Self {
        let mut form = Self {
            keys: Vec::with_capacity(document.items.len()),
            document,
            next_key: 0,
        };
        for _ in 0..form.document.items.len() {
            let key = form.fresh_key();
            form.keys.push(key);
        }
        form
    }

    /// Start from a new draft (see [`draft_invoice`]).
    pub fn draft<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Self {
        Self::new(draft_invoice(today, rng))
    }

    pub fn document(&self) -> &InvoiceDocument {
        &self.document
    }

    /// Items with their keys, in document order.
    pub fn items(&self) -> impl Iterator<Item = (ItemKey, &LineItem)> {
        self.keys.iter().copied().zip(self.document.items.iter())
    }

    pub fn set_invoice_number(&mut self, number: impl Into<String>) {
        self.document.invoice_number = number.into();
    }

    pub fn set_invoice_date(&mut self, date: NaiveDate) {
        self.document.invoice_date = date;
    }

    pub fn set_due_date(&mut self, date: Option<NaiveDate>) {
        self.document.due_date = date;
    }

    pub fn set_currency(&mut self, symbol: impl Into<String>) {
        self.document.currency = symbol.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.document.notes = notes.into();
    }

    pub fn set_terms(&mut self, terms: impl Into<String>) {
        self.document.terms = terms.into();
    }

    pub fn company_mut(&mut self) -> &mut PartyDetails {
        &mut self.document.company
    }

    pub fn client_mut(&mut self) -> &mut PartyDetails {
        &mut self.document.client
    }

    /// Append a default item and return its key.
    pub fn add_item(&mut self) -> ItemKey {
        let key = self.fresh_key();
        self.keys.push(key);
        self.document.items.push(default_item());
        key
    }

    /// Apply one field edit. Returns false if `key` is unknown.
    pub fn update_item(&mut self, key: ItemKey, field: ItemField) -> bool {
        let Some(item) = self.position(key).map(|i| &mut self.document.items[i]) else {
            return false;
        };
        match field {
            ItemField::Description(v) => item.description = v,
            ItemField::HsnCode(v) => item.hsn_code = v,
            ItemField::Quantity(v) => item.quantity = v,
            ItemField::Rate(v) => item.rate = v,
            ItemField::TaxRate(v) => item.tax_rate = v,
        }
        true
    }

    /// Remove an item. The last remaining item cannot be removed; returns
    /// false in that case or if `key` is unknown.
    pub fn remove_item(&mut self, key: ItemKey) -> bool {
        if self.keys.len() <= 1 {
            return false;
        }
        match self.position(key) {
            Some(i) => {
                self.keys.remove(i);
                self.document.items.remove(i);
                true
            }
            None => false,
        }
    }

    /// Discard all edits and start over from a new draft.
    pub fn reset<R: Rng + ?Sized>(&mut self, today: NaiveDate, rng: &mut R) {
        *self = Self::draft(today, rng);
    }

    /// Totals for the current items.
    pub fn totals(&self) -> Result<InvoiceTotals, InvoiceError> {
        super::totals::aggregate_totals(&self.document.items)
    }

    pub fn validate(&self) -> ValidationReport {
        validate_document(&self.document)
    }

    /// The document ready to send, or the validation messages blocking it.
    pub fn submission(&self) -> Result<InvoiceDocument, Vec<String>> {
        let report = self.validate();
        if report.is_valid {
            Ok(self.document.clone())
        } else {
            Err(report.errors)
        }
    }

    fn fresh_key(&mut self) -> ItemKey {
        let key = ItemKey(self.next_key);
        self.next_key += 1;
        key
    }

    fn position(&self, key: ItemKey) -> Option<usize> {
        self.keys.iter().position(|k| *k == key)
    }
}
