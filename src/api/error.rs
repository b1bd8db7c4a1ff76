//! HTTP error mapping.
//!
//! Every failure leaving a handler goes through [`ApiError`], which decides the status
//! code and the JSON body. A missing product is a bare 404.

use crate::product_actor::ProductError;
use crate::validation::{FieldError, ValidationErrors};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Body of every 4xx/5xx response that has one.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("product not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    Catalog(#[from] ProductError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Validation failed".to_string(),
                    errors: errors.into_errors(),
                },
            ),
            ApiError::MalformedBody(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message,
                    errors: Vec::new(),
                },
            ),
            ApiError::Catalog(e @ ProductError::InvalidProduct(_)) => {
                warn!(error = %e, "Store rejected product");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        message: e.to_string(),
                        errors: Vec::new(),
                    },
                )
            }
            ApiError::Catalog(e @ ProductError::StoreUnavailable(_)) => {
                error!(error = %e, "Catalog store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorBody {
                        message: e.to_string(),
                        errors: Vec::new(),
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
