//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, gender as its upper-case name,
//! booleans as 0/1 integers.

use agenda_core::contact::{Contact, Gender};
use chrono::{DateTime, Utc};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Gender ──────────────────────────────────────────────────────────────────

pub fn encode_gender(g: Gender) -> String { g.as_ref().to_owned() }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list matching the field order of [`RawContact::from_row`].
pub const CONTACT_COLUMNS: &str = "id, name, email, phone, gender, \
                                   date_of_birth, profile_picture_url, \
                                   favorite, active, created_at";

/// Raw values read directly from a `contacts` row.
pub struct RawContact {
  pub id:                  i64,
  pub name:                String,
  pub email:               String,
  pub phone:               String,
  pub gender:              Option<String>,
  pub date_of_birth:       Option<String>,
  pub profile_picture_url: Option<String>,
  pub favorite:            bool,
  pub active:              bool,
  pub created_at:          String,
}

impl RawContact {
  /// Read a row selected with [`CONTACT_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:                  row.get(0)?,
      name:                row.get(1)?,
      email:               row.get(2)?,
      phone:               row.get(3)?,
      gender:              row.get(4)?,
      date_of_birth:       row.get(5)?,
      profile_picture_url: row.get(6)?,
      favorite:            row.get(7)?,
      active:              row.get(8)?,
      created_at:          row.get(9)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:                  self.id,
      name:                self.name,
      email:               self.email,
      phone:               self.phone,
      gender:              self
        .gender
        .as_deref()
        .map(Gender::from_stored)
        .transpose()?,
      date_of_birth:       self.date_of_birth.as_deref().map(decode_dt).transpose()?,
      profile_picture_url: self.profile_picture_url,
      favorite:            self.favorite,
      active:              self.active,
      created_at:          decode_dt(&self.created_at)?,
    })
  }
}
