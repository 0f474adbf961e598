//! Submit a draft invoice to a running `gst-invoice-server`.
//!
//! ```sh
//! cargo run --features server --bin gst-invoice-server &
//! cargo run --features client --example submit_invoice
//! ```

use chrono::Utc;
use gst_invoice::client::{InvoiceClient, SubmitError};
use gst_invoice::core::*;

#[tokio::main]
async fn main() {
    let base_url =
        std::env::var("GST_INVOICE_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".into());
    let client = InvoiceClient::new(base_url).expect("client should build");

    let mut form = InvoiceForm::draft(Utc::now().date_naive(), &mut rand::thread_rng());
    let (key, _) = form.items().next().expect("draft has one item");
    form.update_item(key, ItemField::Description("Consulting".into()));
    form.update_item(key, ItemField::Quantity(rust_decimal_macros::dec!(2)));
    form.update_item(key, ItemField::Rate(rust_decimal_macros::dec!(500)));

    let document = match form.submission() {
        Ok(doc) => doc,
        Err(errors) => {
            eprintln!("Invoice is not valid:\n{}", errors.join("\n"));
            return;
        }
    };

    match client.submit(&document).await {
        Ok(resp) => {
            println!("{} ({})", resp.message, resp.invoice_number);
            println!("Download: {}", resp.download_url);
        }
        Err(SubmitError::Network(msg)) => eprintln!("Server unreachable: {msg}"),
        Err(e) => eprintln!("Submission failed: {e}"),
    }
}
