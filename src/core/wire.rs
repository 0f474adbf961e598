//! JSON bodies of the `/calculate` and `/invoice/generate` endpoints.
//!
//! Shared by the `server` handlers and the `client`. Field names are
//! camelCase; decimals are written as strings and accepted as strings or
//! numbers.

use serde::{Deserialize, Serialize};

use super::types::*;

pub const CALCULATE_PATH: &str = "/calculate";
pub const GENERATE_PATH: &str = "/invoice/generate";

pub const ITEMS_REQUIRED: &str = "At least one item is required";
pub const CALCULATE_FAILED: &str = "Failed to calculate invoice totals";
pub const GENERATE_FAILED: &str = "Failed to generate invoice";
pub const GENERATED: &str = "Invoice generated successfully";

/// Body of `POST /calculate`. A missing or `null` `items` is treated like an
/// empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub items: Option<Vec<LineItem>>,
}

/// Successful `POST /calculate` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub success: bool,
    #[serde(flatten)]
    pub totals: InvoiceTotals,
}

impl From<InvoiceTotals> for CalculateResponse {
    fn from(totals: InvoiceTotals) -> Self {
        Self {
            success: true,
            totals,
        }
    }
}

/// Successful `POST /invoice/generate` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub message: String,
    /// The accepted document, echoed back.
    pub data: InvoiceDocument,
    /// Identifier issued by the server.
    pub invoice_number: String,
    pub download_url: String,
}

/// Body of every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    /// Individual validation messages, when the failure is a validation one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_errors(error: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            errors,
        }
    }
}
