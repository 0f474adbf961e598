//! # gst-invoice
//!
//! GST invoice totals and validation: per-item amount and tax, CGST/SGST
//! split, subtotal and grand total, plus GSTIN/email/phone checks and the
//! fixed rule set a document must pass before it is submitted.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Totals are derived from the line items on demand and never stored.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use gst_invoice::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("INV-2024-0001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .company(PartyBuilder::new("Sharma Traders").gstin("22AAAAA0000A1Z5").build())
//!     .client(PartyBuilder::new("Acme").build())
//!     .add_line(LineItemBuilder::new("Consulting", dec!(2), dec!(500)).tax_rate(dec!(18)).build())
//!     .build()
//!     .unwrap();
//!
//! let totals = aggregate_totals(&invoice.items).unwrap();
//! assert_eq!(totals.subtotal, dec!(1000));
//! assert_eq!(totals.total_tax, dec!(180));
//! assert_eq!(totals.grand_total, dec!(1180));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, totals, validation, drafts, numbering, wire format |
//! | `client` | Async client for submitting invoices |
//! | `server` | actix-web handlers for `/calculate` and `/invoice/generate` |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "server")]
pub mod server;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
