//! Client for the invoice endpoints.
//!
//! [`InvoiceClient::submit`] validates locally, then makes a single request.
//! Failures are returned once and never retried.

use std::time::Duration;

use thiserror::Error;

use crate::core::wire::{
    CALCULATE_FAILED, CALCULATE_PATH, CalculateRequest, CalculateResponse, ErrorResponse,
    GENERATE_FAILED, GENERATE_PATH, GenerateResponse,
};
use crate::core::{InvoiceDocument, LineItem, validate_document};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Why a request did not succeed.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// The document failed local validation and was not sent.
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    /// The request could not be completed.
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected {
        status: u16,
        message: String,
        errors: Vec<String>,
    },

    /// The response body was not what the endpoint promises.
    #[error("unexpected response: {0}")]
    Parse(String),
}

impl SubmitError {
    /// Map a non-success reply. Bodies that are not an [`ErrorResponse`]
    /// (proxy pages, empty bodies) get `fallback` as their message.
    fn rejected(status: u16, body: &str, fallback: &str) -> Self {
        let (message, errors) = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(err) => (err.error, err.errors),
            Err(_) => (fallback.to_string(), Vec::new()),
        };
        Self::Rejected {
            status,
            message,
            errors,
        }
    }

    fn network(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            Self::Network(GENERATE_FAILED.into())
        } else {
            Self::Network(message)
        }
    }
}

/// HTTP client bound to one server.
#[derive(Debug, Clone)]
pub struct InvoiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl InvoiceClient {
    /// Client for `base_url` (e.g. `http://localhost:8080`) with a 30 s timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(SubmitError::network)?;
        Ok(Self::with_client(http, base_url))
    }

    /// Use a preconfigured `reqwest` client (custom timeout, proxy, TLS).
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate `document` and send it to `POST /invoice/generate`.
    ///
    /// # Errors
    ///
    /// `SubmitError::Validation` if the document does not pass
    /// [`validate_document`]; nothing is sent in that case.
    /// `SubmitError::Network` on connection problems or timeouts,
    /// `SubmitError::Rejected` for non-success responses.
    pub async fn submit(&self, document: &InvoiceDocument) -> Result<GenerateResponse, SubmitError> {
        let report = validate_document(document);
        if !report.is_valid {
            tracing::debug!(
                invoice_number = %document.invoice_number,
                errors = report.errors.len(),
                "invoice not submitted: validation failed"
            );
            return Err(SubmitError::Validation(report.errors));
        }

        tracing::info!(invoice_number = %document.invoice_number, "submitting invoice");
        let result: Result<GenerateResponse, SubmitError> =
            self.post(GENERATE_PATH, GENERATE_FAILED, document).await;
        match &result {
            Ok(resp) => tracing::info!(
                invoice_number = %resp.invoice_number,
                "invoice generated"
            ),
            Err(err) => tracing::warn!(error = %err, "invoice submission failed"),
        }
        result
    }

    /// Ask the server for totals of `items` via `POST /calculate`.
    pub async fn calculate(&self, items: &[LineItem]) -> Result<CalculateResponse, SubmitError> {
        let body = CalculateRequest {
            items: Some(items.to_vec()),
        };
        self.post(CALCULATE_PATH, CALCULATE_FAILED, &body).await
    }

    /// POST `body` to `path`. A non-success reply whose body is not an
    /// [`ErrorResponse`] is reported with `fallback` as its message.
    async fn post<B, T>(&self, path: &str, fallback: &str, body: &B) -> Result<T, SubmitError>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(SubmitError::network)?;

        let status = resp.status();
        let text = resp.text().await.map_err(SubmitError::network)?;

        if !status.is_success() {
            return Err(SubmitError::rejected(status.as_u16(), &text, fallback));
        }

        serde_json::from_str(&text).map_err(|e| SubmitError::Parse(e.to_string()))
    }
}
