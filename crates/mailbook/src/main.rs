//! `mailbook` - terminal front end for paged in-game mail.
//!
//! Sends mails into a local store and opens them as books, one framed block
//! per page.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod render;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use mailbook_core::{MailRepository, MailSettings};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailbook=info,mailbook_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(default_settings_path);
    let settings = MailSettings::load(&config_path)
        .await
        .with_context(|| format!("loading settings from {}", config_path.display()))?;

    if let Command::Config { init } = cli.command {
        return show_config(&settings, &config_path, init).await;
    }

    let database_path = cli.database.unwrap_or_else(default_database_path);
    if let Some(dir) = database_path.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }
    let repo = MailRepository::new(database_path.to_str().unwrap_or("mailbook.db"))
        .await
        .with_context(|| format!("opening mail store {}", database_path.display()))?;
    info!("Using mail store {:?}", database_path);

    commands::execute(cli.command, &repo, &settings, &mut std::io::stdout()).await
}

/// Print the active settings, optionally writing them out first.
async fn show_config(settings: &MailSettings, path: &Path, init: bool) -> anyhow::Result<()> {
    if init && !path.exists() {
        settings.save(path).await?;
    }

    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}

/// Default settings file location.
fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mailbook")
        .join("settings.json")
}

/// Default mail database location.
fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mailbook")
        .join("mailbook.db")
}
