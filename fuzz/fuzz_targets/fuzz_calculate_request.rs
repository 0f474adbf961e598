#![no_main]

use gst_invoice::core::aggregate_totals;
use gst_invoice::core::wire::{CalculateRequest, CalculateResponse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(req) = serde_json::from_slice::<CalculateRequest>(data) {
        let items = req.items.unwrap_or_default();
        if let Ok(totals) = aggregate_totals(&items) {
            assert_eq!(totals.grand_total, totals.subtotal + totals.total_tax);
            let _ = serde_json::to_vec(&CalculateResponse::from(totals));
        }
    }
});
