// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::api::{ErrorBody, ValidationErrorBody};

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {message}")]
  Validation { message: String, field: Option<String> },

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  /// Validation failure pinned to a specific field of the request body.
  pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
    AppError::Validation {
      message: message.into(),
      field: Some(field.into()),
    }
  }
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in functions that use `?` on anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<sqlx::Error>() {
      return AppError::Sqlx(err.downcast::<sqlx::Error>().unwrap());
    }
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response.
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation { message, field } => HttpResponse::BadRequest().json(ValidationErrorBody {
        message: message.clone(),
        field: field.clone(),
      }),
      AppError::NotFound(m) => HttpResponse::NotFound().json(ErrorBody { message: m.clone() }),
      AppError::Conflict(m) => HttpResponse::Conflict().json(ErrorBody { message: m.clone() }),
      AppError::Config(_) => HttpResponse::InternalServerError().json(ErrorBody {
        message: "Configuration issue".to_string(),
      }),
      // Never leak driver detail to clients.
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(ErrorBody {
        message: "Database operation failed".to_string(),
      }),
      AppError::Internal(_) => HttpResponse::InternalServerError().json(ErrorBody {
        message: "An internal error occurred".to_string(),
      }),
    }
  }
}

// Define a Result type alias for the application.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
