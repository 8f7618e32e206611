//! Core types, validation rules and the store trait for the Agenda contacts
//! manager.
//!
//! This crate is deliberately free of HTTP and database dependencies. The API
//! (authoritative gate) and the CLI (immediate feedback) both validate input
//! through [`validate`], so the rules exist in exactly one place.

pub mod contact;
pub mod error;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
