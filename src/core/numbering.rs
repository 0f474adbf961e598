use chrono::{Datelike, NaiveDate};
use rand::Rng;

use super::error::InvoiceError;

/// Prefix used for generated invoice numbers.
pub const INVOICE_PREFIX: &str = "INV-";

/// Draft invoice number `INV-{year}-{nnnn}` with a random four-digit suffix.
///
/// Draft numbers are placeholders the user usually overwrites; they are not
/// guaranteed to be unique. Use [`InvoiceNumberSequence`] for issued numbers.
pub fn random_invoice_number<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> String {
    let suffix: u16 = rng.gen_range(1000..=9999);
    format!("{INVOICE_PREFIX}{}-{suffix}", date.year())
}

/// Sequential invoice number generator.
///
/// Generates numbers in the format `{prefix}{year}-{sequential}`,
/// e.g. "INV-2024-0001", "INV-2024-0002", etc.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    year: i32,
    next_number: u64,
    zero_pad: usize,
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>, year: i32) -> Self {
        Self::starting_at(prefix, year, 1)
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, year: i32, next_number: u64) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            next_number,
            zero_pad: 4,
        }
    }

    /// Set zero-padding width (default: 4, so "0001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next invoice number.
    pub fn next_number(&mut self) -> String {
        let formatted = self.format(self.next_number);
        self.next_number += 1;
        formatted
    }

    /// Advance to a new year, resetting the counter to 1.
    pub fn advance_year(&mut self, new_year: i32) -> Result<(), InvoiceError> {
        if new_year <= self.year {
            return Err(InvoiceError::Numbering(format!(
                "new year {new_year} must be greater than current year {}",
                self.year
            )));
        }
        self.year = new_year;
        self.next_number = 1;
        Ok(())
    }

    /// Auto-advance year if the given date is in a new year.
    /// Returns true if the year was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        self.advance_year(date.year()).is_ok()
    }

    fn format(&self, number: u64) -> String {
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.year,
            number,
            width = self.zero_pad
        )
    }
}
