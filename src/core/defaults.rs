//! Default values for new invoices and common GST lookup tables.
//!
//! Nothing here reads the clock or a global random source: [`draft_invoice`]
//! takes today's date and the random number generator as arguments.

use chrono::{Days, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::numbering::random_invoice_number;
use super::types::*;

/// Default display currency (Indian rupee).
pub const DEFAULT_CURRENCY: &str = "₹";

/// Tax rate applied to new line items.
pub const DEFAULT_TAX_RATE: Decimal = dec!(18);

/// Days between invoice date and due date on a new draft.
pub const DEFAULT_PAYMENT_DAYS: u64 = 30;

pub const DEFAULT_NOTES: &str = "Thank you for your business!";
pub const DEFAULT_TERMS: &str = "Payment due within 30 days";

/// GST slab rates in percent.
pub const GST_RATES: [Decimal; 5] = [dec!(0), dec!(5), dec!(12), dec!(18), dec!(28)];

/// Whether `rate` is one of the GST slabs in [`GST_RATES`].
pub fn is_gst_slab(rate: Decimal) -> bool {
    GST_RATES.contains(&rate)
}

/// Label for a rate picker, e.g. "GST 18%".
pub fn gst_rate_label(rate: Decimal) -> String {
    format!("GST {}%", rate.normalize())
}

/// Description of a frequently used HSN/SAC code, if known.
pub fn hsn_description(code: &str) -> Option<&'static str> {
    COMMON_HSN_CODES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| COMMON_HSN_CODES[i].1)
}

/// Frequently used HSN/SAC codes. Sorted by code for binary search.
pub static COMMON_HSN_CODES: &[(&str, &str)] = &[
    ("6109", "T-Shirts, Knitted"),
    ("6115", "T-Shirts"),
    ("6205", "Shirts, Woven"),
    ("6211", "Garments"),
    ("9401", "Seats"),
    ("9403", "Furniture"),
    ("9968", "IT Services"),
    ("9983", "Professional Services"),
    ("9985", "Support Services"),
    ("9986", "Support Services - IT"),
];

/// Placeholder company shown on a new invoice.
pub fn default_company() -> PartyDetails {
    PartyDetails {
        name: "Your Company Name".into(),
        address: "Your Address".into(),
        city: "City, State - PIN".into(),
        gstin: "22AAAAA0000A1Z5".into(),
        phone: "9876543210".into(),
        email: "billing@example.com".into(),
        bank: BankDetails {
            bank_name: "Your Bank Name".into(),
            account_number: "XXXXXXXXXXXX".into(),
            ifsc_code: "XXXX0000000".into(),
            bank_branch: "Your Branch Name".into(),
        },
    }
}

/// Placeholder client shown on a new invoice.
pub fn default_client() -> PartyDetails {
    PartyDetails {
        name: "Client Name".into(),
        address: "Client Address".into(),
        city: "City, State - PIN".into(),
        ..PartyDetails::default()
    }
}

/// Line item added by "add item".
pub fn default_item() -> LineItem {
    LineItem {
        description: "Product/Service Description".into(),
        hsn_code: String::new(),
        quantity: Decimal::ONE,
        rate: Decimal::ZERO,
        tax_rate: DEFAULT_TAX_RATE,
    }
}

/// A fresh draft: random `INV-{year}-{nnnn}` number, dated `today`, due
/// [`DEFAULT_PAYMENT_DAYS`] later, with placeholder parties and one item.
///
/// The same `today` and RNG state always produce the same draft.
pub fn draft_invoice<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> InvoiceDocument {
    InvoiceDocument {
        invoice_number: random_invoice_number(today, rng),
        invoice_date: today,
        due_date: today.checked_add_days(Days::new(DEFAULT_PAYMENT_DAYS)),
        currency: DEFAULT_CURRENCY.to_string(),
        company: default_company(),
        client: default_client(),
        items: vec![default_item()],
        notes: DEFAULT_NOTES.to_string(),
        terms: DEFAULT_TERMS.to_string(),
    }
}
