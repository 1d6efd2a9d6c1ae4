// Clippy configuration: enable pedantic but allow overly strict lints
#![allow(clippy::missing_errors_doc)] // Internal functions don't need # Errors docs
#![allow(clippy::module_name_repetitions)] // e.g., BarkClient in bark module is fine
#![allow(clippy::doc_markdown)] // Don't require backticks around macOS, JSON, etc.
#![allow(clippy::new_without_default)] // Constructors here can fail or read the platform

//! bark-notify - Send a Bark push notification from the command line
//!
//! Resolves the Bark device key (flag, `BARK_KEY`, then `config.json`),
//! POSTs one JSON notification to the Bark API and, on macOS, also raises a
//! native desktop notification via `osascript`.
//!
//! Usage:
//!   bark-notify --title "Build" --body "Done"
//!   bark-notify --key KEY --title T --body B --level timeSensitive
//!   bark-notify completions zsh

mod app;
mod bark;
mod cli;
mod config;
mod credential;
mod errors;
mod notify;
#[cfg(test)]
mod test_support;

use app::Notifier;
use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::Result;
use config::BarkConfig;
use credential::CredentialResolver;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build the tracing filter directive from a bare level or a full directive
///
/// A directive that does not name this crate still gets `bark_notify=warn`
/// so config and desktop warnings keep reaching stderr.
fn log_filter(level: &str) -> String {
    if !level.contains('=') {
        format!("bark_notify={level}")
    } else if level.contains("bark_notify") {
        level.to_string()
    } else {
        format!("{level},bark_notify=warn")
    }
}

/// 0 when the push was delivered, 1 for a missing key or failed delivery
fn exit_code(result: &errors::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(remote = e.is_remote_delivery(), "Run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        cli::print_completions(*shell);
        return Ok(ExitCode::SUCCESS);
    }

    // Initialize error handling
    color_eyre::install()?;

    // Logging goes to stderr; stdout carries only confirmations
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter(&cli.log_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let request = cli.request()?;
    let config_path = cli.config.clone().or_else(BarkConfig::default_path);
    tracing::debug!("Config path: {:?}", config_path);

    let resolver = CredentialResolver::new(cli.key.clone(), config_path);
    let notifier = Notifier::new()?;
    tracing::debug!("Endpoint: {}", notifier.client.endpoint());

    let result = app::run(&resolver, &request, &notifier).await;
    Ok(exit_code(&result))
}
