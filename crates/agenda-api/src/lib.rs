//! JSON REST API for Agenda.
//!
//! Exposes an axum [`Router`] backed by any
//! [`agenda_core::store::ContactStore`]. This is the authoritative validation
//! gate: every write goes through [`agenda_core::validate`] before it reaches
//! the store. Transport concerns (binding, TLS, request logging) are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", agenda_api::api_router(store.clone()))
//! ```

pub mod contacts;
pub mod error;

use std::sync::Arc;

use agenda_core::store::ContactStore;
use axum::{
  Router,
  extract::DefaultBodyLimit,
  routing::{get, patch},
};

pub use error::ApiError;

/// Request body cap. Pictures travel inline as data URIs, so axum's 2 MiB
/// default is far too small.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/contacts", get(contacts::list::<S>).post(contacts::create::<S>))
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update_one::<S>)
        .delete(contacts::delete_one::<S>),
    )
    .route("/contacts/{id}/favorite", patch(contacts::toggle_favorite::<S>))
    .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
    .with_state(store)
}
