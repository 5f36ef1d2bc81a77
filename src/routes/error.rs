use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::core::CoordinateError;
use crate::models::ErrorResponse;

/// Errors surfaced to HTTP clients as `{"error": "..."}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Coordinates(#[from] CoordinateError),

    /// No center could be placed; the argument names what was being computed
    #[error("No hay centros con coordenadas válidas para calcular {0}")]
    NoValidCenters(&'static str),

    #[error("Centro no encontrado")]
    CenterNotFound,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Coordinates(_) => StatusCode::BAD_REQUEST,
            ApiError::NoValidCenters(_) | ApiError::CenterNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
