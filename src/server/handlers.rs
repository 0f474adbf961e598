use std::sync::Mutex;

use actix_web::{HttpResponse, web};
use chrono::{NaiveDate, Utc};

use super::config::ServerConfig;
use super::error::ApiError;
use crate::core::wire::{
    CALCULATE_FAILED, CalculateRequest, CalculateResponse, GENERATE_FAILED, GENERATED,
    GenerateResponse, ITEMS_REQUIRED,
};
use crate::core::{
    InvoiceDocument, InvoiceError, InvoiceNumberSequence, aggregate_totals, validate_document,
};

/// Shared handler state: the sequence that issues invoice numbers.
pub struct AppState {
    sequence: Mutex<InvoiceNumberSequence>,
}

impl AppState {
    pub fn new(sequence: InvoiceNumberSequence) -> Self {
        Self {
            sequence: Mutex::new(sequence),
        }
    }

    /// Sequence described by `config`, starting in the year of `today`.
    pub fn from_config(config: &ServerConfig, today: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(
            InvoiceNumberSequence::starting_at(
                config.invoice_prefix.as_str(),
                today.year(),
                config.first_number,
            )
            .with_padding(config.number_width),
        )
    }

    fn issue_number(&self, today: NaiveDate) -> Result<String, ApiError> {
        let mut sequence = self
            .sequence
            .lock()
            .map_err(|e| ApiError::internal(GENERATE_FAILED, e))?;
        sequence.auto_advance(today);
        Ok(sequence.next_number())
    }
}

/// POST /calculate
pub async fn calculate(body: web::Json<CalculateRequest>) -> Result<HttpResponse, ApiError> {
    let items = body.into_inner().items.unwrap_or_default();
    if items.is_empty() {
        return Err(ApiError::MalformedRequest(ITEMS_REQUIRED.into()));
    }

    let totals = aggregate_totals(&items).map_err(|e| match e {
        InvoiceError::Arithmetic(_) => ApiError::MalformedRequest(e.to_string()),
        other => ApiError::internal(CALCULATE_FAILED, other),
    })?;

    tracing::debug!(
        items = totals.items.len(),
        grand_total = %totals.grand_total,
        "calculated invoice totals"
    );
    Ok(HttpResponse::Ok().json(CalculateResponse::from(totals)))
}

/// POST /invoice/generate
///
/// Validates the document and issues a number. Nothing is stored.
pub async fn generate_invoice(
    state: web::Data<AppState>,
    body: web::Json<InvoiceDocument>,
) -> Result<HttpResponse, ApiError> {
    let document = body.into_inner();

    let report = validate_document(&document);
    if !report.is_valid {
        tracing::info!(
            invoice_number = %document.invoice_number,
            errors = report.errors.len(),
            "rejected invalid invoice"
        );
        return Err(ApiError::Validation(report.errors));
    }

    let invoice_number = state.issue_number(Utc::now().date_naive())?;
    tracing::info!(
        %invoice_number,
        client_number = %document.invoice_number,
        items = document.items.len(),
        "invoice generated"
    );

    Ok(HttpResponse::Ok().json(GenerateResponse {
        success: true,
        message: GENERATED.to_string(),
        download_url: format!("/invoice/download/{invoice_number}"),
        invoice_number,
        data: document,
    }))
}

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
    }))
}
