//! `agenda`: command-line client for the Agenda contacts API.
//!
//! # Usage
//!
//! ```text
//! agenda list --favorites --search silva
//! agenda add --name "Ana Lima" --email ana@example.com --phone 11987654321
//! agenda edit 3 --clear-birth --phone "(11) 3333-4444"
//! agenda --url http://localhost:3000 favorite 3
//! ```

mod client;
mod display;
mod form;

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig};
use form::{AddArgs, EditArgs};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "agenda", about = "Command-line client for the Agenda contacts API")]
struct Args {
  /// Path to a TOML config file (`url = "..."`).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the agenda server (default: http://localhost:3000).
  #[arg(long, env = "AGENDA_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List active contacts ordered by name.
  List {
    /// Only favorites.
    #[arg(long)]
    favorites: bool,
    /// Case-insensitive name filter.
    #[arg(long)]
    search:    Option<String>,
  },
  /// Show one contact in detail.
  Show { id: i64 },
  /// Create a contact.
  Add(AddArgs),
  /// Change some fields of a contact.
  Edit {
    id:     i64,
    #[command(flatten)]
    fields: EditArgs,
  },
  /// Soft-delete a contact.
  Delete { id: i64 },
  /// Toggle a contact's favorite flag.
  Favorite { id: i64 },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flag (or env) overrides config file, which overrides the default.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| "http://localhost:3000".to_string()),
  };
  let client = ApiClient::new(api_config)?;

  match run(&client, args.command).await {
    Ok(()) => Ok(ExitCode::SUCCESS),
    Err(e) => match e.downcast_ref::<agenda_core::Error>() {
      Some(agenda_core::Error::Validation(errors)) => {
        for err in errors.iter() {
          eprintln!("{}: {}", err.field, err.message);
        }
        Ok(ExitCode::FAILURE)
      }
      _ => Err(e),
    },
  }
}

async fn run(client: &ApiClient, command: Command) -> Result<()> {
  match command {
    Command::List { favorites, search } => {
      let contacts = client.list(favorites, search.as_deref()).await?;
      if contacts.is_empty() {
        println!("Nenhum contato encontrado.");
      }
      for c in &contacts {
        println!("{}", display::summary_line(c));
      }
    }
    Command::Show { id } => {
      println!("{}", display::detail(&client.get(id).await?));
    }
    Command::Add(fields) => {
      let input = fields.into_input().map_err(agenda_core::Error::from)?;
      let contact = client.create(&input).await?;
      println!("{}", display::summary_line(&contact));
    }
    Command::Edit { id, fields } => {
      let input = fields.into_input().map_err(agenda_core::Error::from)?;
      let contact = client.update(id, &input).await?;
      println!("{}", display::detail(&contact));
    }
    Command::Delete { id } => {
      let contact = client.delete(id).await?;
      println!("Contato #{} removido.", contact.id);
    }
    Command::Favorite { id } => {
      let contact = client.toggle_favorite(id).await?;
      println!("{}", display::summary_line(&contact));
    }
  }
  Ok(())
}
