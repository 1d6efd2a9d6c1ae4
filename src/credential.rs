//! Bark device key resolution
//!
//! Exactly one source wins per run, checked in priority order:
//! 1. `--key` flag
//! 2. environment variable (`BARK_KEY`)
//! 3. `bark_key` in the config file
//!
//! Empty values count as absent.

use crate::config::BarkConfig;
use crate::errors::{NotifyError, Result};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Environment variable consulted when `--key` is absent
pub const KEY_ENV_VAR: &str = "BARK_KEY";

/// Opaque device key. Debug output is redacted so it never reaches logs.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Credential(String);

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Where the winning credential came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Flag,
    Environment,
    ConfigFile,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "--key"),
            Self::Environment => write!(f, "{KEY_ENV_VAR}"),
            Self::ConfigFile => write!(f, "config file"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CredentialResolver {
    pub explicit: Option<String>,
    pub env_var: String,
    pub config_path: Option<PathBuf>,
}

impl CredentialResolver {
    pub fn new(explicit: Option<String>, config_path: Option<PathBuf>) -> Self {
        Self {
            explicit,
            env_var: KEY_ENV_VAR.to_string(),
            config_path,
        }
    }

    /// Resolve against the process environment
    pub fn resolve(&self) -> Result<(Credential, CredentialSource)> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve with an injected environment lookup
    ///
    /// The config file is read up front whenever it exists, so a broken
    /// file is warned about even when the flag or the environment wins.
    pub fn resolve_with<F>(&self, lookup_env: F) -> Result<(Credential, CredentialSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_key = self
            .config_path
            .as_deref()
            .and_then(BarkConfig::load_from_path)
            .and_then(|config| config.bark_key);

        let found = non_empty(self.explicit.clone())
            .map(|key| (key, CredentialSource::Flag))
            .or_else(|| {
                non_empty(lookup_env(&self.env_var)).map(|key| (key, CredentialSource::Environment))
            })
            .or_else(|| non_empty(config_key).map(|key| (key, CredentialSource::ConfigFile)));

        match found {
            Some((key, source)) => {
                tracing::debug!(%source, "Resolved Bark key");
                Ok((Credential(key), source))
            }
            None => Err(NotifyError::MissingCredential),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
impl From<&str> for Credential {
    fn from(s: &str) -> Self {
        Credential(s.to_string())
    }
}
