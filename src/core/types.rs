use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::defaults::DEFAULT_CURRENCY;

/// The invoice document as entered on the form and sent over the wire.
///
/// Aggregate totals are deliberately absent: they are derived from `items`
/// on demand via [`aggregate_totals`](super::aggregate_totals). Any
/// `subtotal`/`totalTax`/`grandTotal` fields present in incoming JSON are
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDocument {
    /// Invoice number as printed, e.g. "INV-2024-4821".
    #[serde(default)]
    pub invoice_number: String,
    /// Date of issue.
    pub invoice_date: NaiveDate,
    /// Payment due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Display currency symbol (e.g. "₹"). Amounts are never converted.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Issuing company.
    #[serde(rename = "companyDetails")]
    pub company: PartyDetails,
    /// Billed client.
    #[serde(rename = "clientDetails")]
    pub client: PartyDetails,
    /// Ordered line items; position is the only identity.
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Free-text note printed under the totals.
    #[serde(default)]
    pub notes: String,
    /// Payment terms.
    #[serde(default)]
    pub terms: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Company or client details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyDetails {
    #[serde(default)]
    pub name: String,
    /// Street address line.
    #[serde(default)]
    pub address: String,
    /// "City, State - PIN" line.
    #[serde(default)]
    pub city: String,
    /// GSTIN. Required (and well-formed) for the company, optional for the client.
    #[serde(default)]
    pub gstin: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    /// Bank account for payment, usually only set on the company. Its
    /// fields sit directly on the party object (`bankName`, `ifscCode`, ...).
    #[serde(flatten)]
    pub bank: BankDetails,
}

/// Bank account printed on the invoice for payment by transfer.
///
/// Empty fields are left out when serializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bank_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub account_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ifsc_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bank_branch: String,
}

impl BankDetails {
    pub fn is_empty(&self) -> bool {
        self.bank_name.is_empty()
            && self.account_number.is_empty()
            && self.ifsc_code.is_empty()
            && self.bank_branch.is_empty()
    }
}

/// One billable row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    /// HSN/SAC classification code; may be empty.
    #[serde(default)]
    pub hsn_code: String,
    pub quantity: Decimal,
    /// Unit rate, before tax.
    pub rate: Decimal,
    /// Tax rate in percent (18 means 18 %).
    pub tax_rate: Decimal,
}

/// A [`LineItem`] together with its derived amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedLineItem {
    #[serde(flatten)]
    pub item: LineItem,
    /// quantity × rate.
    pub amount: Decimal,
    /// amount × tax_rate / 100.
    pub tax: Decimal,
    /// amount + tax.
    pub line_total: Decimal,
}

/// Result of [`aggregate_totals`](super::aggregate_totals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    /// Priced items, in input order.
    pub items: Vec<PricedLineItem>,
    /// Sum of item amounts.
    pub subtotal: Decimal,
    /// Sum of item taxes.
    pub total_tax: Decimal,
    /// subtotal + total_tax.
    pub grand_total: Decimal,
}

/// Where the supply takes place relative to the supplier's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SupplyKind {
    /// Same state: tax is split equally into CGST and SGST.
    IntraState,
    /// Different states: tax is levied as IGST.
    InterState,
}

/// Central/state halves of a tax amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSplit {
    pub cgst: Decimal,
    pub sgst: Decimal,
}

/// One row of the tax breakdown table, grouped by HSN code and tax rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdownRow {
    pub hsn_code: String,
    pub tax_rate: Decimal,
    pub taxable_amount: Decimal,
    pub cgst_rate: Decimal,
    pub cgst: Decimal,
    pub sgst_rate: Decimal,
    pub sgst: Decimal,
    pub total_tax: Decimal,
}

/// Outcome of [`validate_document`](super::validate_document).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    /// Human-readable messages in rule order.
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub(crate) fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
