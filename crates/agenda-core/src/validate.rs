//! Validation and normalisation of raw contact input.
//!
//! Every function here is pure and synchronous. The field-level helpers
//! ([`normalize_phone`], [`is_valid_email`], [`normalize_gender`],
//! [`parse_date`], [`normalize_picture`]) work on single values; the
//! [`ContactInput`] assemblers run all of them and collect every failure
//! instead of stopping at the first.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use strum::{AsRefStr, Display};
use thiserror::Error;

use crate::contact::{ContactPatch, Gender, NewContact, Patch};

// ─── Error taxonomy ──────────────────────────────────────────────────────────

/// Why a single field was rejected.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
  Required,
  InvalidFormat,
  InvalidValue,
  InvalidLength,
  InvalidDate,
}

/// The input fields a [`FieldError`] can point at.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
  Name,
  Email,
  Phone,
  Gender,
  DateOfBirth,
  ProfilePictureUrl,
}

/// A validation failure scoped to one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
  pub field:   Field,
  pub kind:    ErrorKind,
  pub message: String,
}

impl FieldError {
  pub fn new(field: Field, kind: ErrorKind) -> Self {
    Self { field, kind, message: message(field, kind).to_owned() }
  }
}

/// User-facing copy for each failure.
fn message(field: Field, kind: ErrorKind) -> &'static str {
  use ErrorKind::*;
  match (field, kind) {
    (Field::Name, Required) => "Nome é obrigatório.",
    (Field::Name, _) => "Nome inválido ou vazio.",
    (Field::Email, Required) => "E-mail é obrigatório.",
    (Field::Email, _) => "E-mail inválido.",
    (Field::Phone, Required) => "Telefone é obrigatório.",
    (Field::Phone, InvalidLength) => {
      "Telefone inválido. Deve ter 10 ou 11 dígitos (incluindo DDD)."
    }
    (Field::Phone, _) => "Formato de Telefone inválido.",
    (Field::Gender, InvalidValue) => {
      "Gênero inválido. Opções: Masculino, Feminino, Não Binário, Outro."
    }
    (Field::Gender, _) => "Formato de Gênero inválido.",
    (Field::DateOfBirth, InvalidDate) => "Data de Nascimento inválida.",
    (Field::DateOfBirth, _) => "Formato de Data de Nascimento inválido.",
    (Field::ProfilePictureUrl, _) => "URL da Foto de Perfil inválida.",
  }
}

/// Every field error found in one submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(transparent)]
#[error("{} invalid field(s)", .0.len())]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn iter(&self) -> impl Iterator<Item = &FieldError> { self.0.iter() }

  /// Record the failure of `result`, if any, and pass the value through.
  fn check<T>(
    &mut self,
    field: Field,
    result: Result<T, ErrorKind>,
  ) -> Option<T> {
    match result {
      Ok(v) => Some(v),
      Err(kind) => {
        self.0.push(FieldError::new(field, kind));
        None
      }
    }
  }
}

// ─── Phone ───────────────────────────────────────────────────────────────────

/// Reduce `raw` to its digits and format them as `(DD) DDDDD-DDDD` (11
/// digits) or `(DD) DDDD-DDDD` (10 digits).
///
/// Feeding the output back in reproduces it exactly, since only the
/// punctuation is stripped.
pub fn normalize_phone(raw: &str) -> Result<String, ErrorKind> {
  if raw.is_empty() {
    return Err(ErrorKind::Required);
  }

  let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
  match digits.len() {
    11 => Ok(format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])),
    10 => Ok(format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..])),
    _ => Err(ErrorKind::InvalidLength),
  }
}

// ─── Email ───────────────────────────────────────────────────────────────────

/// Syntactic sanity check only. Kept byte-for-byte compatible with the
/// pattern clients already rely on, so `a@b..c` passes and quoted local parts
/// do not.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex")
});

pub fn is_valid_email(raw: &str) -> bool {
  !raw.is_empty() && EMAIL_RE.is_match(raw)
}

// ─── Gender ──────────────────────────────────────────────────────────────────

/// Upper-case `raw` and match it against the [`Gender`] set.
///
/// Absent or `null` is not an error: gender is optional.
pub fn normalize_gender(raw: Option<&Value>) -> Result<Option<Gender>, ErrorKind> {
  match raw {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => s
      .to_uppercase()
      .parse::<Gender>()
      .map(Some)
      .map_err(|_| ErrorKind::InvalidValue),
    Some(_) => Err(ErrorKind::InvalidFormat),
  }
}

// ─── Date of birth ───────────────────────────────────────────────────────────

/// Parse a date of birth.
///
/// Strings may be RFC 3339, a bare `YYYY-MM-DD` (midnight UTC) or a
/// date-time without offset (read as UTC). Numbers are milliseconds since the
/// Unix epoch. A blank string counts as no date.
pub fn parse_date(
  raw: Option<&Value>,
) -> Result<Option<DateTime<Utc>>, ErrorKind> {
  match raw {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
    Some(Value::String(s)) => {
      parse_date_str(s.trim()).map(Some).ok_or(ErrorKind::InvalidDate)
    }
    Some(Value::Number(n)) => n
      .as_i64()
      .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
      .and_then(DateTime::from_timestamp_millis)
      .map(Some)
      .ok_or(ErrorKind::InvalidDate),
    Some(_) => Err(ErrorKind::InvalidFormat),
  }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt.with_timezone(&Utc));
  }
  if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
    return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
  }
  ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    .map(|dt| dt.and_utc())
}

// ─── Picture ─────────────────────────────────────────────────────────────────

/// Trim a picture reference; blank means none. The value is not checked for
/// being a reachable URL or a decodable image.
pub fn normalize_picture(raw: Option<&str>) -> Option<String> {
  raw.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}

// ─── Raw value adapters ──────────────────────────────────────────────────────

fn validate_name(raw: &Value) -> Result<String, ErrorKind> {
  match raw {
    Value::Null => Err(ErrorKind::Required),
    Value::String(s) if s.trim().is_empty() => Err(ErrorKind::Required),
    Value::String(s) => Ok(s.trim().to_owned()),
    _ => Err(ErrorKind::InvalidFormat),
  }
}

fn validate_email(raw: &Value) -> Result<String, ErrorKind> {
  match raw {
    Value::Null => Err(ErrorKind::Required),
    Value::String(s) if s.is_empty() => Err(ErrorKind::Required),
    Value::String(s) if is_valid_email(s) => Ok(s.clone()),
    _ => Err(ErrorKind::InvalidFormat),
  }
}

fn validate_phone(raw: &Value) -> Result<String, ErrorKind> {
  match raw {
    Value::Null => Err(ErrorKind::Required),
    Value::String(s) => normalize_phone(s),
    Value::Number(n) => normalize_phone(&number_text(n)),
    _ => Err(ErrorKind::InvalidFormat),
  }
}

/// Integral numbers render without a fractional part, so `11987654321.0`
/// reads as `11987654321`.
fn number_text(n: &Number) -> String {
  if let Some(i) = n.as_i64() {
    return i.to_string();
  }
  if let Some(u) = n.as_u64() {
    return u.to_string();
  }
  match n.as_f64() {
    Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
    _ => n.to_string(),
  }
}

fn validate_picture(raw: Option<&Value>) -> Result<Option<String>, ErrorKind> {
  match raw {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => Ok(normalize_picture(Some(s.as_str()))),
    Some(_) => Err(ErrorKind::InvalidFormat),
  }
}

/// A required field in an update: omitted means unchanged, `null` is
/// rejected because the field cannot be cleared.
fn required_change<T>(
  raw: &Patch<Value>,
  validate: impl FnOnce(&Value) -> Result<T, ErrorKind>,
) -> Result<Option<T>, ErrorKind> {
  match raw {
    Patch::Keep => Ok(None),
    Patch::Clear => Err(ErrorKind::Required),
    Patch::Set(v) => validate(v).map(Some),
  }
}

/// An optional field in an update. A supplied value that normalises to
/// nothing (e.g. a blank picture reference) clears the field.
fn optional_change<T>(
  raw: &Patch<Value>,
  validate: impl FnOnce(Option<&Value>) -> Result<Option<T>, ErrorKind>,
) -> Result<Patch<T>, ErrorKind> {
  match raw {
    Patch::Keep => Ok(Patch::Keep),
    Patch::Clear => Ok(Patch::Clear),
    Patch::Set(v) => validate(Some(v)).map(Patch::from),
  }
}

// ─── ContactInput ────────────────────────────────────────────────────────────

/// Untyped contact fields as they arrive in a request body.
///
/// Each field keeps the raw JSON value so that wrong types can be reported
/// as field errors instead of failing deserialisation of the whole body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
  #[serde(default, skip_serializing_if = "Patch::is_keep")]
  pub name:                Patch<Value>,
  #[serde(default, skip_serializing_if = "Patch::is_keep")]
  pub email:               Patch<Value>,
  #[serde(default, skip_serializing_if = "Patch::is_keep")]
  pub phone:               Patch<Value>,
  #[serde(default, skip_serializing_if = "Patch::is_keep")]
  pub gender:              Patch<Value>,
  #[serde(default, skip_serializing_if = "Patch::is_keep")]
  pub date_of_birth:       Patch<Value>,
  #[serde(default, skip_serializing_if = "Patch::is_keep")]
  pub profile_picture_url: Patch<Value>,
}

impl ContactInput {
  /// Validate for creation. `name`, `email` and `phone` must be present and
  /// valid; the rest are optional but checked when supplied.
  pub fn to_new_contact(&self) -> Result<NewContact, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = errors.check(
      Field::Name,
      self.name.as_option().map_or(Err(ErrorKind::Required), validate_name),
    );
    let email = errors.check(
      Field::Email,
      self.email.as_option().map_or(Err(ErrorKind::Required), validate_email),
    );
    let phone = errors.check(
      Field::Phone,
      self.phone.as_option().map_or(Err(ErrorKind::Required), validate_phone),
    );
    let gender =
      errors.check(Field::Gender, normalize_gender(self.gender.as_option()));
    let date_of_birth = errors
      .check(Field::DateOfBirth, parse_date(self.date_of_birth.as_option()));
    let profile_picture_url = errors.check(
      Field::ProfilePictureUrl,
      validate_picture(self.profile_picture_url.as_option()),
    );

    let (
      Some(name),
      Some(email),
      Some(phone),
      Some(gender),
      Some(date_of_birth),
      Some(profile_picture_url),
    ) = (name, email, phone, gender, date_of_birth, profile_picture_url)
    else {
      return Err(errors);
    };

    Ok(NewContact {
      name,
      email,
      phone,
      gender,
      date_of_birth,
      profile_picture_url,
    })
  }

  /// Validate for a partial update. Only supplied fields are checked and
  /// only they end up in the patch.
  pub fn to_patch(&self) -> Result<ContactPatch, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = errors.check(Field::Name, required_change(&self.name, validate_name));
    let email =
      errors.check(Field::Email, required_change(&self.email, validate_email));
    let phone =
      errors.check(Field::Phone, required_change(&self.phone, validate_phone));
    let gender =
      errors.check(Field::Gender, optional_change(&self.gender, normalize_gender));
    let date_of_birth = errors.check(
      Field::DateOfBirth,
      optional_change(&self.date_of_birth, parse_date),
    );
    let profile_picture_url = errors.check(
      Field::ProfilePictureUrl,
      optional_change(&self.profile_picture_url, validate_picture),
    );

    let (
      Some(name),
      Some(email),
      Some(phone),
      Some(gender),
      Some(date_of_birth),
      Some(profile_picture_url),
    ) = (name, email, phone, gender, date_of_birth, profile_picture_url)
    else {
      return Err(errors);
    };

    Ok(ContactPatch {
      name,
      email,
      phone,
      gender,
      date_of_birth,
      profile_picture_url,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::{Datelike, TimeZone};
  use serde_json::json;

  use super::*;

  fn input(body: Value) -> ContactInput {
    serde_json::from_value(body).expect("valid input body")
  }

  fn kinds(errors: &FieldErrors) -> Vec<(Field, ErrorKind)> {
    errors.iter().map(|e| (e.field, e.kind)).collect()
  }

  // ── Phone ──────────────────────────────────────────────────────────────────

  #[test]
  fn phone_eleven_digits() {
    assert_eq!(normalize_phone("11987654321").unwrap(), "(11) 98765-4321");
  }

  #[test]
  fn phone_ten_digits() {
    assert_eq!(normalize_phone("1133334444").unwrap(), "(11) 3333-4444");
  }

  #[test]
  fn phone_strips_punctuation() {
    assert_eq!(
      normalize_phone("+55 (11) 3333-4444").unwrap_err(),
      ErrorKind::InvalidLength
    );
    assert_eq!(normalize_phone("(11) 3333.4444").unwrap(), "(11) 3333-4444");
  }

  #[test]
  fn phone_empty_is_required() {
    assert_eq!(normalize_phone("").unwrap_err(), ErrorKind::Required);
  }

  #[test]
  fn phone_lengths_outside_range_are_rejected() {
    let pattern = Regex::new(r"^\(\d{2}\) \d{4,5}-\d{4}$").unwrap();
    for len in 1..=15 {
      let digits: String =
        (0..len).map(|i| char::from(b'0' + (i * 7 % 10) as u8)).collect();
      match normalize_phone(&digits) {
        Ok(formatted) => {
          assert!((10..=11).contains(&len), "len {len} accepted");
          assert!(pattern.is_match(&formatted), "{formatted}");
          let kept: String =
            formatted.chars().filter(char::is_ascii_digit).collect();
          assert_eq!(kept, digits);
        }
        Err(kind) => {
          assert!(!(10..=11).contains(&len), "len {len} rejected");
          assert_eq!(kind, ErrorKind::InvalidLength);
        }
      }
    }
  }

  #[test]
  fn phone_output_reformats_to_itself() {
    for raw in ["11987654321", "1133334444"] {
      let once = normalize_phone(raw).unwrap();
      assert_eq!(normalize_phone(&once).unwrap(), once);
    }
  }

  // ── Email ──────────────────────────────────────────────────────────────────

  #[test]
  fn email_pattern() {
    assert!(is_valid_email("a@b.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@@b.com"));
  }

  #[test]
  fn email_accepts_consecutive_dots() {
    assert!(is_valid_email("a@b..c"));
  }

  // ── Gender ─────────────────────────────────────────────────────────────────

  #[test]
  fn gender_is_case_folded() {
    assert_eq!(
      normalize_gender(Some(&json!("masculino"))).unwrap(),
      Some(Gender::Masculino)
    );
    assert_eq!(
      normalize_gender(Some(&json!("Nao_Binario"))).unwrap(),
      Some(Gender::NaoBinario)
    );
  }

  #[test]
  fn gender_unknown_value() {
    assert_eq!(
      normalize_gender(Some(&json!("alien"))).unwrap_err(),
      ErrorKind::InvalidValue
    );
    assert_eq!(
      normalize_gender(Some(&json!(""))).unwrap_err(),
      ErrorKind::InvalidValue
    );
  }

  #[test]
  fn gender_absent_or_null_is_none() {
    assert_eq!(normalize_gender(None).unwrap(), None);
    assert_eq!(normalize_gender(Some(&Value::Null)).unwrap(), None);
  }

  #[test]
  fn gender_non_string_is_invalid_format() {
    assert_eq!(
      normalize_gender(Some(&json!(3))).unwrap_err(),
      ErrorKind::InvalidFormat
    );
  }

  // ── Dates ──────────────────────────────────────────────────────────────────

  #[test]
  fn date_only_is_midnight_utc() {
    let dt = parse_date(Some(&json!("1990-05-17"))).unwrap().unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(1990, 5, 17, 0, 0, 0).unwrap());
  }

  #[test]
  fn date_accepts_rfc3339_and_naive_datetime() {
    let dt = parse_date(Some(&json!("1990-05-17T12:30:00-03:00")))
      .unwrap()
      .unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(1990, 5, 17, 15, 30, 0).unwrap());

    let dt = parse_date(Some(&json!("1990-05-17T12:30"))).unwrap().unwrap();
    assert_eq!(dt.day(), 17);
  }

  #[test]
  fn date_accepts_epoch_millis() {
    let dt = parse_date(Some(&json!(0))).unwrap().unwrap();
    assert_eq!(dt.year(), 1970);
  }

  #[test]
  fn date_rejects_garbage() {
    assert_eq!(
      parse_date(Some(&json!("not a date"))).unwrap_err(),
      ErrorKind::InvalidDate
    );
    assert_eq!(
      parse_date(Some(&json!("1990-02-30"))).unwrap_err(),
      ErrorKind::InvalidDate
    );
    assert_eq!(
      parse_date(Some(&json!(true))).unwrap_err(),
      ErrorKind::InvalidFormat
    );
  }

  #[test]
  fn date_blank_or_null_is_none() {
    assert_eq!(parse_date(None).unwrap(), None);
    assert_eq!(parse_date(Some(&Value::Null)).unwrap(), None);
    assert_eq!(parse_date(Some(&json!("  "))).unwrap(), None);
  }

  // ── Picture ────────────────────────────────────────────────────────────────

  #[test]
  fn picture_is_trimmed_and_blank_is_none() {
    assert_eq!(
      normalize_picture(Some("  https://x/y.png ")).as_deref(),
      Some("https://x/y.png")
    );
    assert_eq!(normalize_picture(Some("   ")), None);
    assert_eq!(normalize_picture(None), None);
  }

  // ── Create ─────────────────────────────────────────────────────────────────

  #[test]
  fn create_normalises_every_field() {
    let new = input(json!({
      "name": "  Maria Silva ",
      "email": "maria@example.com",
      "phone": "11987654321",
      "gender": "feminino",
      "dateOfBirth": "1985-03-02",
      "profilePictureUrl": "   "
    }))
    .to_new_contact()
    .unwrap();

    assert_eq!(new.name, "Maria Silva");
    assert_eq!(new.phone, "(11) 98765-4321");
    assert_eq!(new.gender, Some(Gender::Feminino));
    assert!(new.date_of_birth.is_some());
    assert_eq!(new.profile_picture_url, None);
  }

  #[test]
  fn create_reports_every_error_at_once() {
    let errors = input(json!({
      "name": "",
      "email": "not-an-email",
      "phone": "123"
    }))
    .to_new_contact()
    .unwrap_err();

    assert_eq!(kinds(&errors), vec![
      (Field::Name, ErrorKind::Required),
      (Field::Email, ErrorKind::InvalidFormat),
      (Field::Phone, ErrorKind::InvalidLength),
    ]);
    assert_eq!(errors.0[0].message, "Nome é obrigatório.");
  }

  #[test]
  fn create_missing_required_fields() {
    let errors = input(json!({ "gender": "alien" })).to_new_contact().unwrap_err();
    assert_eq!(kinds(&errors), vec![
      (Field::Name, ErrorKind::Required),
      (Field::Email, ErrorKind::Required),
      (Field::Phone, ErrorKind::Required),
      (Field::Gender, ErrorKind::InvalidValue),
    ]);
  }

  #[test]
  fn create_accepts_numeric_phone() {
    let new = input(json!({
      "name": "Ana",
      "email": "ana@example.com",
      "phone": 1133334444u64
    }))
    .to_new_contact()
    .unwrap();
    assert_eq!(new.phone, "(11) 3333-4444");
  }

  #[test]
  fn create_accepts_integral_float_phone() {
    let new = input(json!({
      "name": "Ana",
      "email": "ana@example.com",
      "phone": 11987654321.0_f64
    }))
    .to_new_contact()
    .unwrap();
    assert_eq!(new.phone, "(11) 98765-4321");
  }

  #[test]
  fn create_rejects_fractional_phone() {
    let errors = input(json!({
      "name": "Ana",
      "email": "ana@example.com",
      "phone": 11987654321.5_f64
    }))
    .to_new_contact()
    .unwrap_err();
    assert_eq!(kinds(&errors), [(Field::Phone, ErrorKind::InvalidLength)]);
  }

  // ── Update ─────────────────────────────────────────────────────────────────

  #[test]
  fn update_with_only_null_date_clears_it() {
    let patch = input(json!({ "dateOfBirth": null })).to_patch().unwrap();
    assert_eq!(patch, ContactPatch {
      date_of_birth: Patch::Clear,
      ..Default::default()
    });
  }

  #[test]
  fn update_empty_body_is_empty_patch() {
    assert!(input(json!({})).to_patch().unwrap().is_empty());
  }

  #[test]
  fn update_rejects_clearing_required_fields() {
    let errors = input(json!({ "name": null, "phone": null }))
      .to_patch()
      .unwrap_err();
    assert_eq!(kinds(&errors), vec![
      (Field::Name, ErrorKind::Required),
      (Field::Phone, ErrorKind::Required),
    ]);
  }

  #[test]
  fn update_validates_only_supplied_fields() {
    let patch = input(json!({ "phone": "(21) 2222-3333", "gender": "OUTRO" }))
      .to_patch()
      .unwrap();
    assert_eq!(patch.name, None);
    assert_eq!(patch.phone.as_deref(), Some("(21) 2222-3333"));
    assert_eq!(patch.gender, Patch::Set(Gender::Outro));
    assert_eq!(patch.date_of_birth, Patch::Keep);
  }

  #[test]
  fn update_blank_picture_clears() {
    let patch = input(json!({ "profilePictureUrl": "" })).to_patch().unwrap();
    assert_eq!(patch.profile_picture_url, Patch::Clear);

    let errors = input(json!({ "profilePictureUrl": 5 })).to_patch().unwrap_err();
    assert_eq!(kinds(&errors), vec![(
      Field::ProfilePictureUrl,
      ErrorKind::InvalidFormat
    )]);
  }

  #[test]
  fn input_serialises_only_supplied_fields() {
    let body = ContactInput {
      name: Patch::Set(json!("Ana")),
      gender: Patch::Clear,
      ..Default::default()
    };
    assert_eq!(
      serde_json::to_value(&body).unwrap(),
      json!({ "name": "Ana", "gender": null })
    );
  }
}
