//! The client against a real server bound to an ephemeral port.
//!
//! Run with: `cargo test --features all --test client_server_tests`

#![cfg(all(feature = "client", feature = "server"))]

use std::net::TcpListener;

use chrono::{Datelike, NaiveDate, Utc};
use gst_invoice::client::{InvoiceClient, SubmitError};
use gst_invoice::core::wire::ErrorResponse;
use gst_invoice::core::*;
use gst_invoice::server::{self, ServerConfig};
use rust_decimal_macros::dec;

/// Start a server on `127.0.0.1:0` and return its base URL.
fn spawn_server(config: ServerConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = server::serve(listener, &config).unwrap();
    tokio::spawn(server);
    format!("http://127.0.0.1:{port}")
}

fn document() -> InvoiceDocument {
    InvoiceBuilder::new("INV-2024-1234", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .company(default_company())
        .client(PartyBuilder::new("Acme").gstin("27ABCDE1234F1Z5").build())
        .add_line(
            LineItemBuilder::new("Consulting", dec!(2), dec!(500))
                .hsn_code("9983")
                .tax_rate(dec!(18))
                .build(),
        )
        .build()
        .unwrap()
}

#[tokio::test]
async fn calculate_round_trip() {
    let client = InvoiceClient::new(spawn_server(ServerConfig::default())).unwrap();

    let resp = client.calculate(&document().items).await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.totals.subtotal, dec!(1000));
    assert_eq!(resp.totals.total_tax, dec!(180));
    assert_eq!(resp.totals.grand_total, dec!(1180));
    assert_eq!(resp.totals.items[0].item.description, "Consulting");
    assert_eq!(resp.totals.items[0].line_total, dec!(1180));
}

#[tokio::test]
async fn calculate_without_items_is_rejected() {
    let client = InvoiceClient::new(spawn_server(ServerConfig::default())).unwrap();

    match client.calculate(&[]).await {
        Err(SubmitError::Rejected {
            status,
            message,
            errors,
        }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "At least one item is required");
            assert!(errors.is_empty());
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn submit_issues_configured_numbers() {
    let config = ServerConfig {
        invoice_prefix: "GST/".into(),
        first_number: 42,
        number_width: 6,
        ..ServerConfig::default()
    };
    let client = InvoiceClient::new(spawn_server(config)).unwrap();
    let doc = document();
    let year = Utc::now().year();

    let first = client.submit(&doc).await.unwrap();
    assert!(first.success);
    assert_eq!(first.message, "Invoice generated successfully");
    assert_eq!(first.invoice_number, format!("GST/{year}-000042"));
    assert_eq!(
        first.download_url,
        format!("/invoice/download/GST/{year}-000042")
    );
    assert_eq!(first.data, doc);
    assert_eq!(first.data.company.bank.ifsc_code, "XXXX0000000");

    let second = client.submit(&doc).await.unwrap();
    assert_eq!(second.invoice_number, format!("GST/{year}-000043"));
}

#[tokio::test]
async fn server_reports_every_validation_error() {
    // Bypass the client's own check to see the server's answer.
    let base_url = spawn_server(ServerConfig::default());
    let mut doc = document();
    doc.company.name.clear();
    doc.items[0].quantity = dec!(0);

    let resp = reqwest::Client::new()
        .post(format!("{base_url}/invoice/generate"))
        .json(&doc)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let body: ErrorResponse = resp.json().await.unwrap();
    assert!(!body.success);
    assert_eq!(body.error, "Invoice validation failed");
    assert_eq!(
        body.errors,
        [
            "Company name is required",
            "Item 1: Quantity must be greater than 0"
        ]
    );

    // The client refuses the same document without contacting the server.
    let client = InvoiceClient::new(base_url).unwrap();
    match client.submit(&doc).await {
        Err(SubmitError::Validation(errors)) => assert_eq!(errors, body.errors),
        other => panic!("expected validation error, got {other:?}"),
    }
}
