use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use crate::store::StoreError;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Quantity must be a positive integer")]
    InvalidQuantity,

    #[error("Ticket tier '{0}' was not found")]
    TierNotFound(Uuid),

    #[error("Not enough tickets available")]
    InsufficientStock,

    #[error("Payment failed: {0}")]
    PaymentFailed(String),

    #[error("Store error")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidQuantity => StatusCode::BAD_REQUEST,
            AppError::TierNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InsufficientStock => StatusCode::CONFLICT,
            AppError::PaymentFailed(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidQuantity => "INVALID_QUANTITY",
            AppError::TierNotFound(_) => "TIER_NOT_FOUND",
            AppError::InsufficientStock => "INSUFFICIENT_STOCK",
            AppError::PaymentFailed(_) => "PAYMENT_FAILED",
            AppError::Store(_) => "INTERNAL_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::Store(e) => {
                error!(error = ?e, "Store error");
            }
            other => {
                error!(error = ?other, "Request failed");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        // Log internal details
        self.log();

        // Only expose high-level message to the client
        let public_message = match &self {
            AppError::Store(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        error_response(code, public_message, None, status)
    }
}
