use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::core::wire::ErrorResponse;

/// Errors returned by the HTTP handlers.
///
/// Every variant renders as `{ "success": false, "error": ... }`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body could not be parsed, or its contents cannot be priced.
    #[error("{0}")]
    MalformedRequest(String),

    /// The document failed [`validate_document`](crate::core::validate_document).
    #[error("Invoice validation failed")]
    Validation(Vec<String>),

    /// Anything unexpected. Only `message` is sent to the caller; `detail`
    /// is logged.
    #[error("{message}")]
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    pub fn internal(message: &'static str, detail: impl ToString) -> Self {
        Self::Internal {
            message,
            detail: detail.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Validation(errors) => ErrorResponse::with_errors(self.to_string(), errors.clone()),
            Self::Internal { message, detail } => {
                tracing::error!(%detail, "{message}");
                ErrorResponse::new(*message)
            }
            Self::MalformedRequest(_) => ErrorResponse::new(self.to_string()),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::MalformedRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("Failed to generate invoice", "lock poisoned").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_hides_detail() {
        let err = ApiError::internal("Failed to generate invoice", "lock poisoned");
        assert_eq!(err.to_string(), "Failed to generate invoice");
    }
}
