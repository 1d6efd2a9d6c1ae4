//! Bark push API client
//!
//! Sends a single JSON POST to the Bark push endpoint. The device key
//! travels in the body; there are no auth headers and no retries.

use crate::credential::Credential;
use crate::errors::{NotifyError, Result};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use url::Url;

/// JSON endpoint that accepts `device_key` in the body
pub const DEFAULT_ENDPOINT: &str = "https://api.day.app/push";

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// One notification, built fresh per invocation
///
/// `level` is forwarded verbatim (Bark knows `active`, `timeSensitive`
/// and `passive`, but any string is accepted here).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    /// Drop optional fields that are present but empty
    pub fn normalized(self) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.is_empty());
        Self {
            group: keep(self.group),
            level: keep(self.level),
            icon: keep(self.icon),
            url: keep(self.url),
            ..self
        }
    }
}

/// Wire body: `device_key` plus every present request field
#[derive(Debug, Serialize)]
pub struct PushPayload<'a> {
    pub device_key: &'a Credential,
    #[serde(flatten)]
    pub request: &'a NotificationRequest,
}

#[derive(Debug, Clone)]
pub struct BarkClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl BarkClient {
    /// Client for the public Bark endpoint
    pub fn new() -> Result<Self> {
        let endpoint =
            Url::parse(DEFAULT_ENDPOINT).map_err(|source| NotifyError::InvalidEndpoint {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                source,
            })?;
        Ok(Self::with_endpoint(endpoint))
    }

    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST the notification once. Returns the response body on 2xx.
    pub async fn push(&self, key: &Credential, request: &NotificationRequest) -> Result<String> {
        let payload = serde_json::to_vec(&PushPayload {
            device_key: key,
            request,
        })?;

        tracing::debug!(endpoint = %self.endpoint, bytes = payload.len(), "Sending Bark push");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "Bark responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Status { status, body });
        }

        Ok(response.text().await?)
    }
}
