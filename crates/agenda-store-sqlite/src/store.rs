//! The SQLite implementation of [`ContactStore`].

use std::path::Path;

use agenda_core::{
  contact::{Contact, ContactPatch, NewContact},
  store::{ContactQuery, ContactStore},
};
use chrono::Utc;
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::{CONTACT_COLUMNS, RawContact, encode_dt, encode_gender},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An Agenda contact store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted. Every call
/// runs on the connection's single worker thread, so a write and its
/// read-back inside one call never interleave with another request.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store: useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a single-row statement keyed on `?1 = id` and read the row back,
  /// inactive or not. Yields `None` when no row has that id.
  async fn write_and_fetch(
    &self,
    id: i64,
    sql: &'static str,
  ) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        if conn.execute(sql, rusqlite::params![id])? == 0 {
          return Ok(None);
        }
        Ok(select_by_id(conn, id, false)?)
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }
}

/// Select one row by id, optionally hiding soft-deleted records.
fn select_by_id(
  conn: &rusqlite::Connection,
  id: i64,
  active_only: bool,
) -> rusqlite::Result<Option<RawContact>> {
  conn
    .query_row(
      &format!(
        "SELECT {CONTACT_COLUMNS} FROM contacts
         WHERE id = ?1 AND (?2 = 0 OR active = 1)"
      ),
      rusqlite::params![id, active_only],
      RawContact::from_row,
    )
    .optional()
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn create(&self, input: NewContact) -> Result<Contact> {
    let created_at = encode_dt(Utc::now());
    let gender     = input.gender.map(encode_gender);
    let birth      = input.date_of_birth.map(encode_dt);
    let NewContact { name, email, phone, profile_picture_url, .. } = input;

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (
             name, email, phone, gender, date_of_birth,
             profile_picture_url, favorite, active, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, 1, ?7)",
          rusqlite::params![
            name,
            email,
            phone,
            gender,
            birth,
            profile_picture_url,
            created_at,
          ],
        )?;
        let id = conn.last_insert_rowid();
        Ok(select_by_id(conn, id, false)?)
      })
      .await?;

    let contact = raw
      .map(RawContact::into_contact)
      .transpose()?
      .ok_or_else(|| Error::Missing("inserted contact".into()))?;
    tracing::debug!(id = contact.id, "contact created");
    Ok(contact)
  }

  async fn get(&self, id: i64) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| Ok(select_by_id(conn, id, true)?))
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn update(&self, id: i64, patch: ContactPatch) -> Result<Option<Contact>> {
    let ContactPatch {
      name,
      email,
      phone,
      gender,
      date_of_birth,
      profile_picture_url,
    } = patch;

    // Required columns coalesce; clearable columns carry a "provided" flag so
    // an explicit clear is distinct from leaving the column alone.
    let gender      = gender.into_change();
    let birth       = date_of_birth.into_change();
    let picture     = profile_picture_url.into_change();
    let has_gender  = gender.is_some();
    let has_birth   = birth.is_some();
    let has_picture = picture.is_some();
    let gender      = gender.flatten().map(encode_gender);
    let birth       = birth.flatten().map(encode_dt);
    let picture     = picture.flatten();

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE contacts SET
             name                = COALESCE(?2, name),
             email               = COALESCE(?3, email),
             phone               = COALESCE(?4, phone),
             gender              = CASE WHEN ?5 THEN ?6  ELSE gender END,
             date_of_birth       = CASE WHEN ?7 THEN ?8  ELSE date_of_birth END,
             profile_picture_url = CASE WHEN ?9 THEN ?10 ELSE profile_picture_url END
           WHERE id = ?1",
          rusqlite::params![
            id,
            name,
            email,
            phone,
            has_gender,
            gender,
            has_birth,
            birth,
            has_picture,
            picture,
          ],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(select_by_id(conn, id, false)?)
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn deactivate(&self, id: i64) -> Result<Option<Contact>> {
    let contact = self
      .write_and_fetch(id, "UPDATE contacts SET active = 0 WHERE id = ?1")
      .await?;
    if contact.is_some() {
      tracing::debug!(id, "contact deactivated");
    }
    Ok(contact)
  }

  async fn toggle_favorite(&self, id: i64) -> Result<Option<Contact>> {
    self
      .write_and_fetch(id, "UPDATE contacts SET favorite = NOT favorite WHERE id = ?1")
      .await
  }

  async fn list(&self, query: &ContactQuery) -> Result<Vec<Contact>> {
    // Name search and ordering need Unicode case folding, which SQLite's
    // LIKE and NOCASE lack; both happen in `ContactQuery::apply`.
    let favorite_only = query.favorite_only;

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {CONTACT_COLUMNS} FROM contacts
           WHERE active = 1 AND (?1 = 0 OR favorite = 1)"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![favorite_only], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    let contacts = raws
      .into_iter()
      .map(RawContact::into_contact)
      .collect::<Result<Vec<_>>>()?;
    Ok(query.apply(contacts))
  }
}
