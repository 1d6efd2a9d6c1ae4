use crate::errors::NotifyError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up next to the executable
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Optional on-disk configuration. Read-only; never written by this program.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct BarkConfig {
    /// Bark device key
    #[serde(default)]
    pub bark_key: Option<String>,
}

impl BarkConfig {
    /// Get the default configuration path
    ///
    /// `config.json` alongside the running executable, falling back to
    /// the per-user config dir when the executable path is unavailable.
    pub fn default_path() -> Option<PathBuf> {
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)));

        beside_exe.or_else(|| {
            directories::ProjectDirs::from("", "", "bark-notify")
                .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
        })
    }

    /// Load configuration from a specific path
    ///
    /// Returns `None` when the file is absent. Read and parse failures are
    /// logged as warnings and also yield `None`.
    pub fn load_from_path(path: &Path) -> Option<Self> {
        if !path.exists() {
            tracing::debug!("Config file not found at {:?}", path);
            return None;
        }

        match Self::read(path) {
            Ok(config) => {
                tracing::debug!("Loaded configuration from {:?}", path);
                Some(config)
            }
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    fn read(path: &Path) -> Result<Self, NotifyError> {
        let config_read = |source| NotifyError::ConfigRead {
            path: path.to_path_buf(),
            source,
        };

        let content = std::fs::read_to_string(path).map_err(config_read)?;
        serde_json::from_str(&content)
            .map_err(|e| config_read(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}
