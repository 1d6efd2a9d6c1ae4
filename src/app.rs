//! One notification run: resolve key, push, desktop notify
//!
//! Steps run strictly in sequence. The desktop notification is attempted
//! whether or not the push succeeded, and never changes the outcome.

use crate::bark::{BarkClient, NotificationRequest};
use crate::credential::{Credential, CredentialResolver};
use crate::errors::Result;
use crate::notify::{DesktopNotifier, LocalOutcome};

pub struct Notifier {
    pub client: BarkClient,
    pub desktop: DesktopNotifier,
}

impl Notifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: BarkClient::new()?,
            desktop: DesktopNotifier::for_current_platform(),
        })
    }

    /// Push remotely, then attempt the desktop notification
    ///
    /// Returns the push result; desktop failures are only logged.
    pub async fn send(&self, key: &Credential, request: &NotificationRequest) -> Result<()> {
        let remote = match self.client.push(key, request).await {
            Ok(resp_body) => {
                println!("Notification sent. Response: {resp_body}");
                Ok(())
            }
            Err(e) => {
                eprintln!("Error sending notification: {e}");
                Err(e)
            }
        };

        match self.desktop.notify(&request.title, &request.body).await {
            Ok(LocalOutcome::Shown) => println!("macOS notification sent."),
            Ok(LocalOutcome::Skipped) => {}
            Err(e) => tracing::warn!("Failed to send macOS notification: {}", e),
        }

        remote
    }
}

/// Resolve the key and send. A missing key fails before any network I/O.
pub async fn run(
    resolver: &CredentialResolver,
    request: &NotificationRequest,
    notifier: &Notifier,
) -> Result<()> {
    let (key, _source) = resolver.resolve().inspect_err(|e| eprintln!("Error: {e}"))?;
    notifier.send(&key, request).await
}
