//! Async HTTP client wrapping the Agenda JSON API.

use std::time::Duration;

use agenda_core::{contact::Contact, validate::{ContactInput, FieldErrors}};
use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Response};
use serde::Deserialize;

/// Connection settings for the Agenda API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Error body returned by the API on any non-2xx status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
  message: String,
  #[serde(default)]
  errors:  FieldErrors,
}

/// Async HTTP client for the Agenda JSON REST API.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// Decode a contact payload, turning error bodies into errors. Field errors
  /// come back as [`agenda_core::Error::Validation`] so callers can print
  /// them one per line.
  async fn decode<T: serde::de::DeserializeOwned>(
    resp: Response,
    what: &str,
  ) -> Result<T> {
    let status = resp.status();
    if status.is_success() {
      return resp
        .json()
        .await
        .with_context(|| format!("deserialising {what}"));
    }

    match resp.json::<ErrorBody>().await {
      Ok(body) if !body.errors.is_empty() => {
        tracing::debug!(message = %body.message, "server rejected input");
        Err(agenda_core::Error::Validation(body.errors).into())
      }
      Ok(body) => Err(anyhow!("{what} → {status}: {}", body.message)),
      Err(_) => Err(anyhow!("{what} → {status}")),
    }
  }

  /// `GET /api/contacts[?favorite=true][&search=<term>]`
  pub async fn list(
    &self,
    favorites: bool,
    search: Option<&str>,
  ) -> Result<Vec<Contact>> {
    let mut req = self.client.get(self.url("/contacts"));
    if favorites {
      req = req.query(&[("favorite", "true")]);
    }
    if let Some(term) = search {
      req = req.query(&[("search", term)]);
    }
    let resp = req.send().await.context("GET /contacts failed")?;
    Self::decode(resp, "contacts").await
  }

  /// `GET /api/contacts/<id>`
  pub async fn get(&self, id: i64) -> Result<Contact> {
    let resp = self
      .client
      .get(self.url(&format!("/contacts/{id}")))
      .send()
      .await
      .with_context(|| format!("GET /contacts/{id} failed"))?;
    Self::decode(resp, "contact").await
  }

  /// `POST /api/contacts`
  pub async fn create(&self, input: &ContactInput) -> Result<Contact> {
    let resp = self
      .client
      .post(self.url("/contacts"))
      .json(input)
      .send()
      .await
      .context("POST /contacts failed")?;
    Self::decode(resp, "created contact").await
  }

  /// `PUT /api/contacts/<id>`: only the fields set in `input` are sent.
  pub async fn update(&self, id: i64, input: &ContactInput) -> Result<Contact> {
    let resp = self
      .client
      .put(self.url(&format!("/contacts/{id}")))
      .json(input)
      .send()
      .await
      .with_context(|| format!("PUT /contacts/{id} failed"))?;
    Self::decode(resp, "updated contact").await
  }

  /// `DELETE /api/contacts/<id>`
  pub async fn delete(&self, id: i64) -> Result<Contact> {
    let resp = self
      .client
      .delete(self.url(&format!("/contacts/{id}")))
      .send()
      .await
      .with_context(|| format!("DELETE /contacts/{id} failed"))?;
    Self::decode(resp, "deleted contact").await
  }

  /// `PATCH /api/contacts/<id>/favorite`
  pub async fn toggle_favorite(&self, id: i64) -> Result<Contact> {
    let resp = self
      .client
      .patch(self.url(&format!("/contacts/{id}/favorite")))
      .send()
      .await
      .with_context(|| format!("PATCH /contacts/{id}/favorite failed"))?;
    Self::decode(resp, "contact").await
  }
}
