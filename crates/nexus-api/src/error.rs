//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use nexus_core::Error as CoreError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error(transparent)]
  Core(#[from] CoreError),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Core(e) => match e {
        CoreError::RecordNotFound(_) | CoreError::UnknownTicket(_) => StatusCode::NOT_FOUND,
        CoreError::EmptyReply | CoreError::InvalidFilter(_) => StatusCode::BAD_REQUEST,
        CoreError::NoMessageSelected | CoreError::SubmissionInProgress => StatusCode::CONFLICT,
      },
    }
  }

  /// Reject a form whose required text fields are blank.
  pub fn require(fields: &[(&str, &str)]) -> Result<(), ApiError> {
    let missing: Vec<&str> = fields
      .iter()
      .filter(|(_, value)| value.trim().is_empty())
      .map(|(name, _)| *name)
      .collect();
    if missing.is_empty() {
      Ok(())
    } else {
      Err(ApiError::BadRequest(format!("missing required field(s): {}", missing.join(", "))))
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let message = match &self {
      ApiError::NotFound(m) | ApiError::BadRequest(m) | ApiError::Conflict(m) => m.clone(),
      ApiError::Core(e) => e.to_string(),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
