//! Contact types: the single entity managed by Agenda.
//!
//! A contact is created active and not favorite. It is edited in place, its
//! favorite flag is flipped by a dedicated operation, and it is never
//! physically deleted: deletion only clears `active`.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{AsRefStr, Display, EnumString, VariantNames};

use crate::{Error, Result};

// ─── Gender ──────────────────────────────────────────────────────────────────

/// The closed set of gender values a contact may carry.
///
/// Stored and serialised in upper case (`NAO_BINARIO`), whatever case the
/// caller submitted.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumString,
  VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
  Masculino,
  Feminino,
  NaoBinario,
  Outro,
}

impl Gender {
  /// Human-readable label shown to users.
  pub fn label(self) -> &'static str {
    match self {
      Self::Masculino => "Masculino",
      Self::Feminino => "Feminino",
      Self::NaoBinario => "Não Binário",
      Self::Outro => "Outro",
    }
  }

  /// Decode the stored column form. Unlike user input this is never
  /// case-folded: anything but the canonical spelling is corruption.
  pub fn from_stored(s: &str) -> Result<Self> {
    Self::from_str(s).map_err(|_| Error::UnknownGender(s.to_owned()))
  }
}

// ─── Patch ───────────────────────────────────────────────────────────────────

/// A field in a partial update.
///
/// Distinguishes a key that was omitted (`Keep`) from a key explicitly set to
/// `null` (`Clear`). Deserialise with `#[serde(default)]` so that a missing
/// key lands on `Keep`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
  #[default]
  Keep,
  Clear,
  Set(T),
}

impl<T> Patch<T> {
  pub fn is_keep(&self) -> bool { matches!(self, Self::Keep) }

  /// The new value, if one was supplied. `Keep` and `Clear` both yield `None`.
  pub fn as_option(&self) -> Option<&T> {
    match self {
      Self::Set(v) => Some(v),
      Self::Keep | Self::Clear => None,
    }
  }

  /// `None` when the field should be left alone; `Some(None)` when it should
  /// be cleared.
  pub fn into_change(self) -> Option<Option<T>> {
    match self {
      Self::Keep => None,
      Self::Clear => Some(None),
      Self::Set(v) => Some(Some(v)),
    }
  }
}

impl<T> From<Option<T>> for Patch<T> {
  fn from(value: Option<T>) -> Self {
    value.map_or(Self::Clear, Self::Set)
  }
}

impl<T: Serialize> Serialize for Patch<T> {
  /// `Keep` should be skipped with `skip_serializing_if = "Patch::is_keep"`;
  /// if it is not, it is written as `null` like `Clear`.
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::Set(v) => serializer.serialize_some(v),
      Self::Keep | Self::Clear => serializer.serialize_none(),
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Ok(Option::<T>::deserialize(deserializer)?.into())
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A stored contact. `phone` is always in its formatted display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  /// Assigned by the store; never changes.
  pub id:                  i64,
  pub name:                String,
  pub email:               String,
  pub phone:               String,
  pub gender:              Option<Gender>,
  pub date_of_birth:       Option<DateTime<Utc>>,
  /// External URL or inline data URI; passed through untouched.
  pub profile_picture_url: Option<String>,
  pub favorite:            bool,
  /// `false` once soft-deleted.
  pub active:              bool,
  pub created_at:          DateTime<Utc>,
}

/// Input to [`crate::store::ContactStore::create`], already validated.
/// `id`, `favorite`, `active` and `created_at` are set by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
  pub name:                String,
  pub email:               String,
  pub phone:               String,
  pub gender:              Option<Gender>,
  pub date_of_birth:       Option<DateTime<Utc>>,
  pub profile_picture_url: Option<String>,
}

/// Input to [`crate::store::ContactStore::update`], already validated.
///
/// Required fields cannot be cleared, so they only need `Option`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
  pub name:                Option<String>,
  pub email:               Option<String>,
  pub phone:               Option<String>,
  pub gender:              Patch<Gender>,
  pub date_of_birth:       Patch<DateTime<Utc>>,
  pub profile_picture_url: Patch<String>,
}

impl ContactPatch {
  /// `true` when applying the patch would change nothing.
  pub fn is_empty(&self) -> bool {
    self.name.is_none()
      && self.email.is_none()
      && self.phone.is_none()
      && self.gender.is_keep()
      && self.date_of_birth.is_keep()
      && self.profile_picture_url.is_keep()
  }
}
