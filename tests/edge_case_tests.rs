//! Edge cases: boundary values, overflow, wire format quirks.

use chrono::NaiveDate;
use gst_invoice::core::wire::{CalculateRequest, ErrorResponse};
use gst_invoice::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn item(quantity: Decimal, rate: Decimal, tax_rate: Decimal) -> LineItem {
    LineItemBuilder::new("Widget", quantity, rate)
        .tax_rate(tax_rate)
        .build()
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn empty_item_list_totals_zero() {
    let totals = aggregate_totals(&[]).unwrap();
    assert!(totals.items.is_empty());
    assert_eq!(totals.subtotal, Decimal::ZERO);
    assert_eq!(totals.total_tax, Decimal::ZERO);
    assert_eq!(totals.grand_total, Decimal::ZERO);
}

#[test]
fn zero_rate_and_zero_tax() {
    let totals = aggregate_totals(&[item(dec!(5), Decimal::ZERO, dec!(18))]).unwrap();
    assert_eq!(totals.grand_total, Decimal::ZERO);

    let totals = aggregate_totals(&[item(dec!(5), dec!(10), Decimal::ZERO)]).unwrap();
    assert_eq!(totals.total_tax, Decimal::ZERO);
    assert_eq!(totals.grand_total, dec!(50));
}

#[test]
fn sub_paisa_amounts_are_not_rounded() {
    let totals = aggregate_totals(&[item(dec!(1), dec!(0.01), dec!(18))]).unwrap();
    assert_eq!(totals.total_tax, dec!(0.0018));
    assert_eq!(format_amount("₹", totals.total_tax), "₹0.00");
    assert_eq!(format_amount("₹", totals.grand_total), "₹0.01");
}

#[test]
fn overflow_is_an_error() {
    let err = aggregate_totals(&[item(Decimal::MAX, dec!(2), dec!(18))]).unwrap_err();
    assert!(matches!(err, InvoiceError::Arithmetic(_)));

    let err = aggregate_totals(&[
        item(Decimal::ONE, Decimal::MAX, Decimal::ZERO),
        item(Decimal::ONE, Decimal::MAX, Decimal::ZERO),
    ])
    .unwrap_err();
    assert!(matches!(err, InvoiceError::Arithmetic(_)));
}

#[test]
fn half_paisa_rounds_away_from_zero() {
    assert_eq!(round_amount(dec!(2.345)), dec!(2.35));
    assert_eq!(round_amount(dec!(-2.345)), dec!(-2.35));
    assert_eq!(format_amount("Rs. ", dec!(7)), "Rs. 7.00");
}

// ---------------------------------------------------------------------------
// Validation boundaries
// ---------------------------------------------------------------------------

#[test]
fn zero_rate_is_allowed_but_zero_quantity_is_not() {
    let doc = InvoiceBuilder::new("INV-1", date(2024, 1, 1))
        .company(default_company())
        .client(default_client())
        .add_line(item(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO))
        .build_unchecked()
        .unwrap();
    assert_eq!(
        validate_document(&doc).errors,
        ["Item 1: Quantity must be greater than 0"]
    );
}

#[test]
fn whitespace_names_count_as_missing() {
    let doc = InvoiceBuilder::new("INV-1", date(2024, 1, 1))
        .company(PartyBuilder::new("   ").gstin("22AAAAA0000A1Z5").build())
        .client(PartyBuilder::new("\t").build())
        .add_line(item(dec!(1), dec!(1), dec!(18)))
        .build_unchecked()
        .unwrap();
    assert_eq!(
        validate_document(&doc).errors,
        ["Company name is required", "Client name is required"]
    );
}

#[test]
fn gstin_edge_cases() {
    // Entity code may not be 0.
    assert!(!is_valid_gstin("22AAAAA0000A0Z5"));
    // 14th character must be Z.
    assert!(!is_valid_gstin("22AAAAA0000A1Y5"));
    assert!(!is_valid_gstin("22AAAAA0000A1Z5 "));
    assert!(!is_valid_gstin("22aaaaa0000a1z5"));
    // Fifteen characters, but not fifteen bytes.
    assert!(!is_valid_gstin("22AAAAA0000A1Zé"));
    assert!(is_valid_gstin("27ABCDE1234FAZZ"));
}

#[test]
fn email_edge_cases() {
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@.co"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a b@c.de"));
    assert!(!is_valid_email("a@b@c.de"));
}

#[test]
fn phone_edge_cases() {
    assert!(is_valid_phone("0123456789"));
    assert!(!is_valid_phone("+919876543210"));
    assert!(!is_valid_phone("98765 43210"));
    assert!(!is_valid_phone("987654321٠"));
}

#[test]
fn builder_item_limit() {
    let mut builder = InvoiceBuilder::new("INV-1", date(2024, 1, 1))
        .company(default_company())
        .client(default_client());
    for _ in 0..=MAX_LINE_ITEMS {
        builder = builder.add_line(default_item());
    }
    assert!(matches!(
        builder.build_unchecked(),
        Err(InvoiceError::Builder(_))
    ));
}

#[test]
fn builder_requires_parties() {
    let err = InvoiceBuilder::new("INV-1", date(2024, 1, 1))
        .build_unchecked()
        .unwrap_err();
    assert_eq!(err.to_string(), "builder error: company is required");
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[test]
fn decimals_accept_numbers_and_strings() {
    let req: CalculateRequest = serde_json::from_str(
        r#"{"items":[{"description":"A","quantity":2,"rate":"500","taxRate":18.5}]}"#,
    )
    .unwrap();
    let items = req.items.unwrap();
    assert_eq!(items[0].quantity, dec!(2));
    assert_eq!(items[0].rate, dec!(500));
    assert_eq!(items[0].tax_rate, dec!(18.5));
    assert_eq!(items[0].hsn_code, "");
}

#[test]
fn missing_items_deserialize_as_none() {
    let req: CalculateRequest = serde_json::from_str("{}").unwrap();
    assert!(req.items.is_none());
    let req: CalculateRequest = serde_json::from_str(r#"{"items":null}"#).unwrap();
    assert!(req.items.is_none());
}

#[test]
fn non_numeric_quantity_is_rejected() {
    let res = serde_json::from_str::<CalculateRequest>(
        r#"{"items":[{"description":"A","quantity":"lots","rate":1,"taxRate":18}]}"#,
    );
    assert!(res.is_err());
}

#[test]
fn ui_item_ids_are_ignored() {
    let item: LineItem = serde_json::from_str(
        r#"{"id":1718000000000,"description":"A","hsnCode":"9983","quantity":1,"rate":1,"taxRate":18}"#,
    )
    .unwrap();
    assert_eq!(item.hsn_code, "9983");
}

#[test]
fn document_uses_camel_case_keys() {
    let doc = InvoiceBuilder::new("INV-2024-0001", date(2024, 6, 15))
        .due_date(date(2024, 7, 15))
        .company(default_company())
        .client(default_client())
        .add_line(default_item())
        .build()
        .unwrap();
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["invoiceNumber"], "INV-2024-0001");
    assert_eq!(json["invoiceDate"], "2024-06-15");
    assert_eq!(json["dueDate"], "2024-07-15");
    assert_eq!(json["companyDetails"]["gstin"], "22AAAAA0000A1Z5");
    assert_eq!(json["companyDetails"]["ifscCode"], "XXXX0000000");
    assert!(json["companyDetails"].get("bank").is_none());
    assert!(json["clientDetails"].get("bankName").is_none());
    assert!(json["items"][0].get("taxRate").is_some());
}

#[test]
fn bank_fields_sit_on_the_party() {
    let company: PartyDetails = serde_json::from_str(
        r#"{
            "name": "Your Company Name",
            "address": "Your Address",
            "city": "City, State - PIN",
            "gstin": "22AAAAA0000A1Z5",
            "phone": "9876543210",
            "email": "billing@example.com",
            "bankName": "SBI",
            "accountNumber": "12345678901",
            "ifscCode": "SBIN0000001",
            "bankBranch": "Raipur Main"
        }"#,
    )
    .unwrap();
    assert_eq!(company.bank.bank_name, "SBI");
    assert_eq!(company.bank.account_number, "12345678901");
    assert_eq!(company.bank.ifsc_code, "SBIN0000001");
    assert_eq!(company.bank.bank_branch, "Raipur Main");

    let json = serde_json::to_value(&company).unwrap();
    assert_eq!(json["bankName"], "SBI");
    assert_eq!(json["ifscCode"], "SBIN0000001");
    let back: PartyDetails = serde_json::from_value(json).unwrap();
    assert_eq!(back, company);
}

#[test]
fn partial_bank_details_are_kept() {
    let client: PartyDetails =
        serde_json::from_str(r#"{"name":"Acme","ifscCode":"HDFC0000123"}"#).unwrap();
    assert_eq!(client.bank.ifsc_code, "HDFC0000123");
    assert!(client.bank.bank_name.is_empty());
    assert!(!client.bank.is_empty());

    let json = serde_json::to_value(&client).unwrap();
    assert_eq!(json, serde_json::json!({
        "name": "Acme",
        "address": "",
        "city": "",
        "gstin": "",
        "phone": "",
        "email": "",
        "ifscCode": "HDFC0000123"
    }));
}

#[test]
fn validation_report_shape() {
    let doc = InvoiceBuilder::new("INV-1", date(2024, 1, 1))
        .company(PartyDetails::default())
        .client(PartyBuilder::new("Acme").build())
        .add_line(item(dec!(2), dec!(500), dec!(18)))
        .build_unchecked()
        .unwrap();

    insta::assert_json_snapshot!(validate_document(&doc), @r#"
    {
      "isValid": false,
      "errors": [
        "Company name is required",
        "Valid company GSTIN is required"
      ]
    }
    "#);
}

#[test]
fn error_response_shape() {
    insta::assert_json_snapshot!(ErrorResponse::new("At least one item is required"), @r#"
    {
      "success": false,
      "error": "At least one item is required"
    }
    "#);
}
