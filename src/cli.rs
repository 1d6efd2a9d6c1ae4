//! CLI argument parsing
//!
//! Uses clap for argument parsing with derive macros.

use crate::bark::NotificationRequest;
use crate::errors::{NotifyError, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

/// Send a Bark push notification (plus a desktop notification on macOS)
#[derive(Parser, Debug)]
#[command(name = "bark-notify")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Bark device key (or set BARK_KEY env var, or bark_key in config.json)
    #[arg(long)]
    pub key: Option<String>,

    /// Notification title
    #[arg(long, required = true)]
    pub title: Option<String>,

    /// Notification body
    #[arg(long, required = true)]
    pub body: Option<String>,

    /// Notification group
    #[arg(long)]
    pub group: Option<String>,

    /// Notification level (active, timeSensitive, passive)
    #[arg(long)]
    pub level: Option<String>,

    /// Notification icon URL
    #[arg(long)]
    pub icon: Option<String>,

    /// Click URL
    #[arg(long)]
    pub url: Option<String>,

    /// Config file holding bark_key (default: config.json next to the executable)
    #[arg(long, env = "BARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Notification built from the flags; empty optional flags are dropped
    pub fn request(&self) -> Result<NotificationRequest> {
        let title = self.title.clone().ok_or(NotifyError::MissingField("title"))?;
        let body = self.body.clone().ok_or(NotifyError::MissingField("body"))?;

        Ok(NotificationRequest {
            title,
            body,
            group: self.group.clone(),
            level: self.level.clone(),
            icon: self.icon.clone(),
            url: self.url.clone(),
        }
        .normalized())
    }
}

/// Generate shell completions and print to stdout
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "bark-notify", &mut io::stdout());
}
