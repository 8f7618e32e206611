//! API error type and [`axum::response::IntoResponse`] implementation.

use agenda_core::validate::FieldErrors;
use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Every variant renders as `{"message": "..."}`; validation failures add an
/// `errors` array with one entry per rejected field. Unreadable JSON bodies
/// arrive here through [`crate::contacts::JsonBody`] and keep axum's status.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("validation failed: {0}")]
  Validation(#[from] FieldErrors),

  #[error("unreadable body: {0}")]
  Body(#[from] JsonRejection),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn contact_not_found() -> Self {
    Self::NotFound("Contato não encontrado.".into())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "message": m }))).into_response()
      }
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "message": m }))).into_response()
      }
      ApiError::Validation(errors) => (
        StatusCode::BAD_REQUEST,
        Json(json!({
          "message": "Verifique os dados do formulário.",
          "errors": errors,
        })),
      )
        .into_response(),
      ApiError::Body(rejection) => {
        let status = rejection.status();
        let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
          "Corpo da requisição muito grande."
        } else {
          "Corpo da requisição inválido."
        };
        tracing::debug!(error = %rejection, "rejected request body");
        (status, Json(json!({ "message": message }))).into_response()
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store operation failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "message": "Erro interno do servidor." })),
        )
          .into_response()
      }
    }
  }
}
