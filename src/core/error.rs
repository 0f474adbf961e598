use thiserror::Error;

/// Errors that can occur while building, numbering or pricing an invoice.
///
/// Validation failures of a document are not errors in this sense: they are
/// reported as a [`ValidationReport`](super::ValidationReport). The
/// `Validation` variant only appears when a builder is asked to produce a
/// document that does not pass.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// The built document failed one or more validation rules.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Invoice number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// An amount exceeded the range of the decimal type.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// The requested tax treatment is not modelled.
    #[error("unsupported: {0}")]
    Unsupported(String),
}
