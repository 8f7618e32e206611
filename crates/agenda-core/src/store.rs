//! The `ContactStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `agenda-store-sqlite`).
//! Higher layers (`agenda-api`) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::contact::{Contact, ContactPatch, NewContact};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`ContactStore::list`]. Inactive contacts are never listed.
#[derive(Debug, Clone, Default)]
pub struct ContactQuery {
  /// Keep only favorites.
  pub favorite_only: bool,
  /// Case-insensitive substring matched against the name. Blank means no
  /// filter.
  pub search:        Option<String>,
}

impl ContactQuery {
  fn search_term(&self) -> Option<String> {
    self
      .search
      .as_deref()
      .map(str::trim)
      .filter(|t| !t.is_empty())
      .map(str::to_lowercase)
  }

  /// Filter and order `contacts` the way every backend must return them:
  /// active only, by name ignoring case, ties broken by id.
  pub fn apply(&self, mut contacts: Vec<Contact>) -> Vec<Contact> {
    let term = self.search_term();
    contacts.retain(|c| {
      c.active
        && (!self.favorite_only || c.favorite)
        && term
          .as_deref()
          .is_none_or(|t| c.name.to_lowercase().contains(t))
    });
    contacts.sort_by_cached_key(|c| (c.name.to_lowercase(), c.id));
    contacts
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a contact store backend.
///
/// Operations addressed by id return `Ok(None)` when no record has that id.
/// `get` additionally hides soft-deleted records; the mutating operations
/// reach inactive records too.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new contact with `active = true` and `favorite = false`.
  fn create(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Retrieve an active contact by id.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Apply `patch` and return the updated record. Fields the patch leaves
  /// alone are untouched. An empty patch returns the record unchanged.
  fn update(
    &self,
    id: i64,
    patch: ContactPatch,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Soft delete: set `active = false` and return the record.
  fn deactivate(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Flip `favorite` atomically and return the record.
  fn toggle_favorite(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Active contacts matching `query`, ordered as by [`ContactQuery::apply`].
  fn list<'a>(
    &'a self,
    query: &'a ContactQuery,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + 'a;
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;

  fn contact(id: i64, name: &str, favorite: bool, active: bool) -> Contact {
    Contact {
      id,
      name: name.into(),
      email: format!("{id}@example.com"),
      phone: "(11) 3333-4444".into(),
      gender: None,
      date_of_birth: None,
      profile_picture_url: None,
      favorite,
      active,
      created_at: Utc::now(),
    }
  }

  fn names(contacts: &[Contact]) -> Vec<&str> {
    contacts.iter().map(|c| c.name.as_str()).collect()
  }

  #[test]
  fn apply_orders_by_name_ignoring_case() {
    let all = vec![
      contact(1, "bruno", false, true),
      contact(2, "Ana", false, true),
      contact(3, "Carla", false, true),
    ];
    let out = ContactQuery::default().apply(all);
    assert_eq!(names(&out), ["Ana", "bruno", "Carla"]);
  }

  #[test]
  fn apply_drops_inactive() {
    let all = vec![contact(1, "Ana", true, false), contact(2, "Bia", false, true)];
    let out = ContactQuery::default().apply(all);
    assert_eq!(names(&out), ["Bia"]);
  }

  #[test]
  fn apply_favorite_and_search_filters() {
    let all = vec![
      contact(1, "João Silva", true, true),
      contact(2, "Joana", false, true),
      contact(3, "Pedro Silva", true, true),
    ];

    let favorites = ContactQuery { favorite_only: true, search: None };
    assert_eq!(names(&favorites.apply(all.clone())), ["João Silva", "Pedro Silva"]);

    let search = ContactQuery { favorite_only: false, search: Some(" JOÃ ".into()) };
    assert_eq!(names(&search.apply(all.clone())), ["João Silva"]);

    let blank = ContactQuery { favorite_only: false, search: Some("  ".into()) };
    assert_eq!(blank.apply(all).len(), 3);
  }
}
