use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::error::InvoiceError;
use super::types::*;

const HUNDRED: Decimal = dec!(100);
const TWO: Decimal = dec!(2);

/// Line amount before tax: `quantity × rate`. Never rounded.
///
/// Negative inputs are priced as given; rejecting them is the job of
/// [`validate_document`](super::validate_document).
pub fn line_amount(quantity: Decimal, rate: Decimal) -> Result<Decimal, InvoiceError> {
    quantity.checked_mul(rate).ok_or_else(|| {
        InvoiceError::Arithmetic(format!("line amount {quantity} x {rate} is out of range"))
    })
}

/// Tax on a line amount: `amount × tax_rate / 100`. Never rounded.
pub fn line_tax(amount: Decimal, tax_rate: Decimal) -> Result<Decimal, InvoiceError> {
    amount
        .checked_mul(tax_rate)
        .and_then(|v| v.checked_div(HUNDRED))
        .ok_or_else(|| {
            InvoiceError::Arithmetic(format!("tax on {amount} at {tax_rate}% is out of range"))
        })
}

impl PricedLineItem {
    /// Price a single item.
    pub fn price(item: &LineItem) -> Result<Self, InvoiceError> {
        let amount = line_amount(item.quantity, item.rate)?;
        let tax = line_tax(amount, item.tax_rate)?;
        let line_total = checked_add(amount, tax)?;
        Ok(Self {
            item: item.clone(),
            amount,
            tax,
            line_total,
        })
    }
}

/// Price every item and sum the results.
///
/// The output keeps the input order. The input slice is only read, so calling
/// this twice on the same items yields identical totals.
pub fn aggregate_totals(items: &[LineItem]) -> Result<InvoiceTotals, InvoiceError> {
    let items = items
        .iter()
        .map(PricedLineItem::price)
        .collect::<Result<Vec<_>, _>>()?;

    let (subtotal, total_tax) = items.iter().try_fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(subtotal, total_tax), item| {
            Ok::<_, InvoiceError>((
                checked_add(subtotal, item.amount)?,
                checked_add(total_tax, item.tax)?,
            ))
        },
    )?;
    let grand_total = checked_add(subtotal, total_tax)?;

    Ok(InvoiceTotals {
        items,
        subtotal,
        total_tax,
        grand_total,
    })
}

/// Split a tax amount between the central and state authorities.
///
/// Only intra-state supplies are modelled. Inter-state supplies attract IGST,
/// which is not implemented and is reported as [`InvoiceError::Unsupported`].
pub fn split_tax(tax: Decimal, supply: SupplyKind) -> Result<TaxSplit, InvoiceError> {
    match supply {
        SupplyKind::IntraState => {
            let cgst = tax / TWO;
            Ok(TaxSplit {
                cgst,
                sgst: tax - cgst,
            })
        }
        SupplyKind::InterState => Err(InvoiceError::Unsupported(
            "IGST for inter-state supplies is not implemented".into(),
        )),
    }
}

/// Tax breakdown for an intra-state invoice, one row per (HSN code, tax rate).
///
/// Rows are sorted by HSN code, then rate.
pub fn tax_breakdown(items: &[LineItem]) -> Result<Vec<TaxBreakdownRow>, InvoiceError> {
    let mut groups: BTreeMap<(String, Decimal), (Decimal, Decimal)> = BTreeMap::new();

    for item in items {
        let priced = PricedLineItem::price(item)?;
        let entry = groups
            .entry((item.hsn_code.clone(), item.tax_rate.normalize()))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 = checked_add(entry.0, priced.amount)?;
        entry.1 = checked_add(entry.1, priced.tax)?;
    }

    groups
        .into_iter()
        .map(|((hsn_code, tax_rate), (taxable_amount, total_tax))| {
            let split = split_tax(total_tax, SupplyKind::IntraState)?;
            let half_rate = tax_rate / TWO;
            Ok(TaxBreakdownRow {
                hsn_code,
                tax_rate,
                taxable_amount,
                cgst_rate: half_rate,
                cgst: split.cgst,
                sgst_rate: half_rate,
                sgst: split.sgst,
                total_tax,
            })
        })
        .collect()
}

/// Round to 2 decimal places, half away from zero. For display only.
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount for display, e.g. `format_amount("₹", dec!(1180))` is `"₹1180.00"`.
pub fn format_amount(symbol: &str, value: Decimal) -> String {
    let mut rounded = round_amount(value);
    rounded.rescale(2);
    format!("{symbol}{rounded}")
}

fn checked_add(a: Decimal, b: Decimal) -> Result<Decimal, InvoiceError> {
    a.checked_add(b)
        .ok_or_else(|| InvoiceError::Arithmetic(format!("sum {a} + {b} is out of range")))
}
