#![no_main]

use gst_invoice::core::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parse → validate → price → serialize must not panic at any step.
    if let Ok(doc) = serde_json::from_slice::<InvoiceDocument>(data) {
        let report = validate_document(&doc);
        assert_eq!(report.is_valid, report.errors.is_empty());
        let _ = validate_contact(&doc.company);
        let _ = validate_contact(&doc.client);
        if let Ok(totals) = aggregate_totals(&doc.items) {
            let _ = format_amount(&doc.currency, totals.grand_total);
        }
        let _ = tax_breakdown(&doc.items);
        let _ = serde_json::to_string(&doc);
    }
});
