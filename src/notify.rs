//! Native desktop notifications
//!
//! macOS only: shells out to `osascript` with a `display notification`
//! AppleScript. On every other platform this is a silent no-op.

use crate::errors::{NotifyError, Result};
use tokio::process::Command;

/// Result of a local notification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalOutcome {
    Shown,
    /// Not on the targeted platform
    Skipped,
}

#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    pub enabled: bool,
    pub program: String,
}

impl DesktopNotifier {
    pub fn for_current_platform() -> Self {
        Self {
            enabled: cfg!(target_os = "macos"),
            program: "osascript".to_string(),
        }
    }

    /// Show a desktop notification
    ///
    /// Runs to completion before returning. Failures are reported to the
    /// caller, who is expected to log and move on.
    pub async fn notify(&self, title: &str, body: &str) -> Result<LocalOutcome> {
        if !self.enabled {
            return Ok(LocalOutcome::Skipped);
        }

        let script = applescript(title, body);
        let output = Command::new(&self.program)
            .args(["-e", &script])
            .output()
            .await
            .map_err(|e| NotifyError::LocalNotification(format!("{}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NotifyError::LocalNotification(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(LocalOutcome::Shown)
    }
}

/// Build the `display notification` script with both strings escaped
pub fn applescript(title: &str, body: &str) -> String {
    format!(
        "display notification \"{}\" with title \"{}\"",
        escape(body),
        escape(title)
    )
}

/// Escape for an AppleScript string literal. Backslashes go first so the
/// escapes added for quotes are not themselves doubled.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
