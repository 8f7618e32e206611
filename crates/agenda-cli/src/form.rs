//! Turning command-line flags into [`ContactInput`] bodies.
//!
//! The bodies are validated with the same rules the server applies, so a
//! bad phone number is reported before any request is made.

use agenda_core::{
  contact::Patch,
  validate::{ContactInput, FieldErrors},
};
use clap::Args;
use serde_json::Value;

/// Flags accepted by `agenda add`.
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
  #[arg(long)]
  pub name:    String,
  #[arg(long)]
  pub email:   String,
  /// Digits with or without punctuation, e.g. `11987654321`.
  #[arg(long)]
  pub phone:   String,
  /// masculino, feminino, nao_binario or outro (any case).
  #[arg(long)]
  pub gender:  Option<String>,
  /// Date of birth, e.g. `1990-05-17`.
  #[arg(long)]
  pub birth:   Option<String>,
  /// Picture URL or data URI.
  #[arg(long)]
  pub picture: Option<String>,
}

/// Flags accepted by `agenda edit`. Anything not given is left unchanged.
#[derive(Args, Debug, Clone, Default)]
pub struct EditArgs {
  #[arg(long)]
  pub name:          Option<String>,
  #[arg(long)]
  pub email:         Option<String>,
  #[arg(long)]
  pub phone:         Option<String>,
  #[arg(long, conflicts_with = "clear_gender")]
  pub gender:        Option<String>,
  #[arg(long)]
  pub clear_gender:  bool,
  #[arg(long, conflicts_with = "clear_birth")]
  pub birth:         Option<String>,
  #[arg(long)]
  pub clear_birth:   bool,
  #[arg(long, conflicts_with = "clear_picture")]
  pub picture:       Option<String>,
  #[arg(long)]
  pub clear_picture: bool,
}

fn set(value: Option<String>) -> Patch<Value> {
  value.map_or(Patch::Keep, |v| Patch::Set(Value::String(v)))
}

fn set_or_clear(value: Option<String>, clear: bool) -> Patch<Value> {
  if clear { Patch::Clear } else { set(value) }
}

impl AddArgs {
  /// Build the create body, rejecting it locally if the server would.
  pub fn into_input(self) -> Result<ContactInput, FieldErrors> {
    let input = ContactInput {
      name:                Patch::Set(Value::String(self.name)),
      email:               Patch::Set(Value::String(self.email)),
      phone:               Patch::Set(Value::String(self.phone)),
      gender:              set(self.gender),
      date_of_birth:       set(self.birth),
      profile_picture_url: set(self.picture),
    };
    input.to_new_contact()?;
    Ok(input)
  }
}

impl EditArgs {
  /// Build the update body, rejecting it locally if the server would.
  pub fn into_input(self) -> Result<ContactInput, FieldErrors> {
    let input = ContactInput {
      name:                set(self.name),
      email:               set(self.email),
      phone:               set(self.phone),
      gender:              set_or_clear(self.gender, self.clear_gender),
      date_of_birth:       set_or_clear(self.birth, self.clear_birth),
      profile_picture_url: set_or_clear(self.picture, self.clear_picture),
    };
    input.to_patch()?;
    Ok(input)
  }
}
