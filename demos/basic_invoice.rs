use chrono::NaiveDate;
use gst_invoice::core::*;
use rust_decimal_macros::dec;

fn main() {
    let invoice = InvoiceBuilder::new("INV-2024-0042", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
        .company(
            PartyBuilder::new("Sharma Traders")
                .address("12 MG Road")
                .city("Raipur, Chhattisgarh - 492001")
                .gstin("22AAAAA0000A1Z5")
                .phone("9876543210")
                .email("billing@sharmatraders.in")
                .bank(BankDetails {
                    bank_name: "State Bank of India".into(),
                    account_number: "30012345678".into(),
                    ifsc_code: "SBIN0000001".into(),
                    bank_branch: "Raipur Main".into(),
                })
                .build(),
        )
        .client(
            PartyBuilder::new("Acme Pvt Ltd")
                .city("Bhilai, Chhattisgarh - 490001")
                .gstin("22BBBBB1111B1Z3")
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Consulting", dec!(2), dec!(500))
                .hsn_code("9983")
                .tax_rate(dec!(18))
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Office chairs", dec!(4), dec!(1499.50))
                .hsn_code("9401")
                .tax_rate(dec!(12))
                .build(),
        )
        .notes("Thank you for your business!")
        .terms("Payment due within 30 days")
        .build()
        .expect("invoice should be valid");

    let totals = aggregate_totals(&invoice.items).expect("amounts in range");
    let cur = invoice.currency.as_str();

    println!("Invoice: {}", invoice.invoice_number);
    println!("Date:    {}", invoice.invoice_date);
    println!("From:    {}", invoice.company.name);
    println!("To:      {}", invoice.client.name);
    println!("---");
    for priced in &totals.items {
        println!(
            "  {} x {} @ {} = {} (+{} tax)",
            priced.item.quantity,
            priced.item.description,
            format_amount(cur, priced.item.rate),
            format_amount(cur, priced.amount),
            format_amount(cur, priced.tax),
        );
    }
    println!("---");
    for row in tax_breakdown(&invoice.items).expect("amounts in range") {
        println!(
            "  HSN {:<6} taxable {}  CGST {}% {}  SGST {}% {}",
            row.hsn_code,
            format_amount(cur, row.taxable_amount),
            row.cgst_rate,
            format_amount(cur, row.cgst),
            row.sgst_rate,
            format_amount(cur, row.sgst),
        );
    }
    println!("---");
    println!("Subtotal:    {}", format_amount(cur, totals.subtotal));
    println!("Total tax:   {}", format_amount(cur, totals.total_tax));
    println!("Grand total: {}", format_amount(cur, totals.grand_total));

    let bank = &invoice.company.bank;
    if !bank.is_empty() {
        println!("---");
        println!("Pay to: {} ({})", bank.bank_name, bank.bank_branch);
        println!("A/C {}  IFSC {}", bank.account_number, bank.ifsc_code);
    }
}
