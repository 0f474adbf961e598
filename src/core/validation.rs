use rust_decimal::Decimal;

use super::types::*;
use super::wire::ITEMS_REQUIRED;

/// Validate a document before submission.
///
/// Returns every rule violation found, in a fixed order: company, client,
/// then items (all checks of item 1 before item 2). A failing document is an
/// ordinary outcome, so this never returns an error.
pub fn validate_document(doc: &InvoiceDocument) -> ValidationReport {
    let mut errors = Vec::new();

    if doc.company.name.trim().is_empty() {
        errors.push("Company name is required".to_string());
    }

    if !is_valid_gstin(&doc.company.gstin) {
        errors.push("Valid company GSTIN is required".to_string());
    }

    if doc.client.name.trim().is_empty() {
        errors.push("Client name is required".to_string());
    }

    // The client's GSTIN is optional, but must be well-formed if given.
    if !doc.client.gstin.is_empty() && !is_valid_gstin(&doc.client.gstin) {
        errors.push("Invalid client GSTIN format".to_string());
    }

    if doc.items.is_empty() {
        errors.push(ITEMS_REQUIRED.to_string());
    } else {
        for (i, item) in doc.items.iter().enumerate() {
            validate_item(item, i + 1, &mut errors);
        }
    }

    ValidationReport::from_errors(errors)
}

fn validate_item(item: &LineItem, n: usize, errors: &mut Vec<String>) {
    if item.description.trim().is_empty() {
        errors.push(format!("Item {n}: Description is required"));
    }

    if item.quantity <= Decimal::ZERO {
        errors.push(format!("Item {n}: Quantity must be greater than 0"));
    }

    if item.rate.is_sign_negative() && !item.rate.is_zero() {
        errors.push(format!("Item {n}: Rate must be a positive number"));
    }

    if item.tax_rate.is_sign_negative() && !item.tax_rate.is_zero() {
        errors.push(format!("Item {n}: Tax rate must be a positive number"));
    }
}

/// Check that `value` is a well-formed GSTIN.
///
/// Layout (15 characters): state code (2 digits), PAN (5 letters, 4 digits,
/// 1 letter), entity code (`1`-`9` or a letter), the literal `Z`, and a
/// check character (digit or letter). Letters must be uppercase.
///
/// The check character is only pattern-matched; its checksum is not verified.
pub fn is_valid_gstin(value: &str) -> bool {
    let b = value.as_bytes();
    b.len() == 15
        && b[..2].iter().all(u8::is_ascii_digit)
        && b[2..7].iter().all(u8::is_ascii_uppercase)
        && b[7..11].iter().all(u8::is_ascii_digit)
        && b[11].is_ascii_uppercase()
        && matches!(b[12], b'1'..=b'9' | b'A'..=b'Z')
        && b[13] == b'Z'
        && (b[14].is_ascii_digit() || b[14].is_ascii_uppercase())
}

/// Permissive `local@domain.tld` check.
///
/// No whitespace anywhere, exactly one `@` with something before it, and a
/// `.` in the domain part that is neither its first nor its last character.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Exactly 10 ASCII digits.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Advisory checks of a party's contact fields.
///
/// Empty fields are accepted; filled-in ones must pass [`is_valid_phone`] and
/// [`is_valid_email`]. These are not part of [`validate_document`].
pub fn validate_contact(party: &PartyDetails) -> Vec<String> {
    let mut errors = Vec::new();

    if !party.phone.is_empty() && !is_valid_phone(&party.phone) {
        errors.push(format!("Invalid phone number for {}", party_label(party)));
    }

    if !party.email.is_empty() && !is_valid_email(&party.email) {
        errors.push(format!("Invalid email address for {}", party_label(party)));
    }

    errors
}

fn party_label(party: &PartyDetails) -> &str {
    let name = party.name.trim();
    if name.is_empty() { "unnamed party" } else { name }
}
