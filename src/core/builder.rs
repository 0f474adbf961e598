use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::defaults::{DEFAULT_CURRENCY, DEFAULT_TAX_RATE};
use super::error::InvoiceError;
use super::types::*;
use super::validation;

/// Upper bound on line items per document.
pub const MAX_LINE_ITEMS: usize = 10_000;

/// Builder for constructing valid invoice documents.
///
/// ```
/// use gst_invoice::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new("INV-2024-0001", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .company(PartyBuilder::new("Sharma Traders").gstin("22AAAAA0000A1Z5").build())
///     .client(PartyBuilder::new("Acme").build())
///     .add_line(LineItemBuilder::new("Consulting", dec!(2), dec!(500)).tax_rate(dec!(18)).build())
///     .build()
///     .unwrap();
///
/// assert_eq!(aggregate_totals(&invoice.items).unwrap().grand_total, dec!(1180));
/// ```
pub struct InvoiceBuilder {
    invoice_number: String,
    invoice_date: NaiveDate,
    due_date: Option<NaiveDate>,
    currency: String,
    company: Option<PartyDetails>,
    client: Option<PartyDetails>,
    items: Vec<LineItem>,
    notes: String,
    terms: String,
}

impl InvoiceBuilder {
    pub fn new(invoice_number: impl Into<String>, invoice_date: NaiveDate) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            invoice_date,
            due_date: None,
            currency: DEFAULT_CURRENCY.to_string(),
            company: None,
            client: None,
            items: Vec::new(),
            notes: String::new(),
            terms: String::new(),
        }
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency = symbol.into();
        self
    }

    pub fn company(mut self, party: PartyDetails) -> Self {
        self.company = Some(party);
        self
    }

    pub fn client(mut self, party: PartyDetails) -> Self {
        self.client = Some(party);
        self
    }

    pub fn add_line(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = terms.into();
        self
    }

    /// Build the document and run [`validate_document`](validation::validate_document).
    /// All failing rules are reported, joined with `"; "`.
    pub fn build(self) -> Result<InvoiceDocument, InvoiceError> {
        let doc = self.build_unchecked()?;

        let report = validation::validate_document(&doc);
        if !report.is_valid {
            return Err(InvoiceError::Validation(report.errors.join("; ")));
        }

        Ok(doc)
    }

    /// Build without validation. Useful for drafts and for importing data
    /// that will be validated later.
    pub fn build_unchecked(self) -> Result<InvoiceDocument, InvoiceError> {
        let company = self
            .company
            .ok_or_else(|| InvoiceError::Builder("company is required".into()))?;
        let client = self
            .client
            .ok_or_else(|| InvoiceError::Builder("client is required".into()))?;

        if self.items.len() > MAX_LINE_ITEMS {
            return Err(InvoiceError::Builder(format!(
                "invoice cannot have more than {MAX_LINE_ITEMS} line items"
            )));
        }

        Ok(InvoiceDocument {
            invoice_number: self.invoice_number,
            invoice_date: self.invoice_date,
            due_date: self.due_date,
            currency: self.currency,
            company,
            client,
            items: self.items,
            notes: self.notes,
            terms: self.terms,
        })
    }
}

/// Builder for [`PartyDetails`].
pub struct PartyBuilder {
    party: PartyDetails,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            party: PartyDetails {
                name: name.into(),
                ..PartyDetails::default()
            },
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.party.address = address.into();
        self
    }

    /// The "City, State - PIN" line.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.party.city = city.into();
        self
    }

    pub fn gstin(mut self, gstin: impl Into<String>) -> Self {
        self.party.gstin = gstin.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.party.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.party.email = email.into();
        self
    }

    pub fn bank(mut self, bank: BankDetails) -> Self {
        self.party.bank = bank;
        self
    }

    pub fn build(self) -> PartyDetails {
        self.party
    }
}

/// Builder for [`LineItem`]. The tax rate defaults to 18 %.
pub struct LineItemBuilder {
    description: String,
    hsn_code: String,
    quantity: Decimal,
    rate: Decimal,
    tax_rate: Decimal,
}

impl LineItemBuilder {
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            hsn_code: String::new(),
            quantity,
            rate,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }

    pub fn hsn_code(mut self, code: impl Into<String>) -> Self {
        self.hsn_code = code.into();
        self
    }

    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            description: self.description,
            hsn_code: self.hsn_code,
            quantity: self.quantity,
            rate: self.rate,
            tax_rate: self.tax_rate,
        }
    }
}
