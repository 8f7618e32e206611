//! Plain-text rendering of contacts for the terminal.

use agenda_core::contact::Contact;

/// One line per contact: id, favorite star, name, email, phone.
pub fn summary_line(c: &Contact) -> String {
  let star = if c.favorite { "★" } else { " " };
  format!("{:>5} {star} {}  <{}>  {}", format!("#{}", c.id), c.name, c.email, c.phone)
}

/// Multi-line detail view; unset optional fields are shown as `-`.
pub fn detail(c: &Contact) -> String {
  let gender = c.gender.map_or("-", |g| g.label());
  let birth = c
    .date_of_birth
    .map_or_else(|| "-".to_owned(), |d| d.format("%d/%m/%Y").to_string());
  let picture = c.profile_picture_url.as_deref().map_or("-", preview);

  [
    format!("Nome:       {}", c.name),
    format!("E-mail:     {}", c.email),
    format!("Telefone:   {}", c.phone),
    format!("Gênero:     {gender}"),
    format!("Nascimento: {birth}"),
    format!("Foto:       {picture}"),
    format!("Favorito:   {}", if c.favorite { "sim" } else { "não" }),
    format!("Criado em:  {}", c.created_at.format("%d/%m/%Y %H:%M")),
  ]
  .join("\n")
}

/// Inline data URIs can be megabytes long; show only their header.
fn preview(reference: &str) -> &str {
  if reference.starts_with("data:") {
    reference.split_once(',').map_or(reference, |(head, _)| head)
  } else {
    reference
  }
}

#[cfg(test)]
mod tests {
  use agenda_core::contact::Gender;
  use chrono::{TimeZone, Utc};

  use super::*;

  fn contact() -> Contact {
    Contact {
      id:                  12,
      name:                "Ana Lima".into(),
      email:               "ana@example.com".into(),
      phone:               "(11) 98765-4321".into(),
      gender:              Some(Gender::NaoBinario),
      date_of_birth:       Some(Utc.with_ymd_and_hms(1990, 5, 17, 0, 0, 0).unwrap()),
      profile_picture_url: Some("data:image/png;base64,iVBORw0KGgo".into()),
      favorite:            true,
      active:              true,
      created_at:          Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
    }
  }

  #[test]
  fn summary_marks_favorites() {
    let line = summary_line(&contact());
    assert!(line.contains("#12"));
    assert!(line.contains('★'));
    assert!(line.contains("(11) 98765-4321"));
  }

  #[test]
  fn detail_uses_labels_and_truncates_data_uris() {
    let text = detail(&contact());
    assert!(text.contains("Não Binário"));
    assert!(text.contains("17/05/1990"));
    assert!(text.contains("data:image/png;base64"));
    assert!(!text.contains("iVBORw0KGgo"));
  }
}
