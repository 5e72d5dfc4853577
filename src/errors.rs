use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("File not found or empty file")]
    SourceNotFound,

    #[error("Order Not found")]
    NotFound,

    #[error("{0}")]
    MalformedData(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Numeric code carried in the error payload. None of the failures here
    /// define one.
    pub fn code(&self) -> i64 {
        0
    }

    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            error: ErrorDetail {
                code: self.code(),
                message: self.to_string(),
            },
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::SourceNotFound => AppError::SourceNotFound,
            DomainError::NotFound => AppError::NotFound,
            DomainError::MalformedData(msg) => AppError::MalformedData(msg),
        }
    }
}

/// `{"error": {"code": 0, "message": "..."}}`
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ErrorPayload {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub code: i64,
    pub message: String,
}

/// Failures travel in the body; the status stays 200.
impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Ok().json(self.payload())
    }
}
