use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::errors::{DomainError, FieldError};

pub type ApiResult<T> = Result<T, ApiError>;

/// Wire-level error shape. Lookup failures serialize as
/// `{"error": "<message>"}`, validation failures as
/// `{"error": [ {"field": ..., "message": ...}, ... ]}`.
#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<FieldError>),
    NotFound(String),
}

impl ApiError {
    pub fn from_domain(error: DomainError) -> Self {
        match error {
            DomainError::Validation(errors) => Self::Validation(errors),
            DomainError::NotFound(message) => Self::NotFound(message),
        }
    }
}

#[derive(Debug, Serialize)]
struct MessageBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct FieldErrorsBody {
    error: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(FieldErrorsBody { error: errors })).into_response()
            }
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageBody { error: message })).into_response()
            }
        }
    }
}
