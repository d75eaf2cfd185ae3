//! Unified error handling for the admin page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::shopify::ShopifyError;

/// Application-level error type.
///
/// A fetch or render failure fails the whole request; there are no partial
/// results and no degraded rendering.
#[derive(Debug, Error)]
pub enum AppError {
    /// Shopify API operation failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] ShopifyError),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Admin request error"
        );

        let status = match &self {
            Self::Shopify(_) => StatusCode::BAD_GATEWAY,
            Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Shopify(_) => "External service error".to_string(),
            Self::Template(_) => "Internal server error".to_string(),
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Shopify(ShopifyError::Unauthorized("bad token".to_string()));
        assert_eq!(err.to_string(), "Shopify error: Unauthorized: bad token");
    }

    #[test]
    fn test_app_error_status_codes() {
        let response =
            AppError::Shopify(ShopifyError::RateLimited(60)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
