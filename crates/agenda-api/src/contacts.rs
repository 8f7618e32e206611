//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | Optional `?favorite=true`, `?search=<term>` |
//! | `POST`   | `/contacts` | Body: [`ContactInput`]; returns 201 + stored contact |
//! | `GET`    | `/contacts/{id}` | 404 if missing or soft-deleted |
//! | `PUT`    | `/contacts/{id}` | Partial update; omitted keys are untouched |
//! | `DELETE` | `/contacts/{id}` | Soft delete; returns the deactivated contact |
//! | `PATCH`  | `/contacts/{id}/favorite` | Flips `favorite` |

use std::sync::Arc;

use agenda_core::{
  contact::Contact,
  store::{ContactQuery, ContactStore},
  validate::ContactInput,
};
use axum::{
  Json,
  extract::{FromRequest, Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;

use crate::error::ApiError;

/// [`Json`] whose rejections render as an [`ApiError`] body.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

fn parse_id(raw: &str) -> Result<i64, ApiError> {
  raw
    .trim()
    .parse()
    .map_err(|_| ApiError::BadRequest("ID de contato inválido.".into()))
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Only the literal `true` enables the filter.
  pub favorite: Option<String>,
  pub search:   Option<String>,
}

/// `GET /contacts[?favorite=true][&search=<term>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let query = ContactQuery {
    favorite_only: params.favorite.as_deref() == Some("true"),
    search:        params.search,
  };

  let contacts = store
    .list(&query)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(contacts))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts`: returns 201 + the stored [`Contact`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  JsonBody(body): JsonBody<ContactInput>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let new_contact = body.to_new_contact()?;
  let contact = store
    .create(new_contact)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  tracing::info!(id = contact.id, "contact created");
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = parse_id(&id)?;
  let contact = store
    .get(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(ApiError::contact_not_found)?;
  Ok(Json(contact))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contacts/{id}`: only keys present in the body are validated and
/// written; `null` clears an optional field.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  JsonBody(body): JsonBody<ContactInput>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = parse_id(&id)?;
  let patch = body.to_patch()?;
  let contact = store
    .update(id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(ApiError::contact_not_found)?;
  tracing::info!(id, "contact updated");
  Ok(Json(contact))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/{id}`: marks the contact inactive; the row is kept.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = parse_id(&id)?;
  let contact = store
    .deactivate(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(ApiError::contact_not_found)?;
  tracing::info!(id, "contact deactivated");
  Ok(Json(contact))
}

// ─── Favorite ─────────────────────────────────────────────────────────────────

/// `PATCH /contacts/{id}/favorite`
pub async fn toggle_favorite<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = parse_id(&id)?;
  let contact = store
    .toggle_favorite(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(ApiError::contact_not_found)?;
  tracing::info!(id, favorite = contact.favorite, "favorite toggled");
  Ok(Json(contact))
}
