//! SQL schema for the Agenda SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are never deleted; `active = 0` marks a soft delete.
CREATE TABLE IF NOT EXISTS contacts (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    name                TEXT    NOT NULL,
    email               TEXT    NOT NULL,
    phone               TEXT    NOT NULL,   -- formatted, e.g. '(11) 98765-4321'
    gender              TEXT,               -- 'MASCULINO' | 'FEMININO' | 'NAO_BINARIO' | 'OUTRO'
    date_of_birth       TEXT,               -- RFC 3339 UTC
    profile_picture_url TEXT,
    favorite            INTEGER NOT NULL DEFAULT 0,
    active              INTEGER NOT NULL DEFAULT 1,
    created_at          TEXT    NOT NULL    -- RFC 3339 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS contacts_active_idx ON contacts(active);

PRAGMA user_version = 1;
";
