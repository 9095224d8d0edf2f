// Rituals API port - contract between the services and the HTTP adapter

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::actions::{LoginLink, SlackTestReceipt};
use crate::domain::payload::DashboardPayload;

/// Errors surfaced by rituals API operations. `Display` carries the
/// caller-facing message; admin surfaces show it verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success HTTP status. The message is resolved from the body
    /// `detail` field, then the status reason, then a generic fallback.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Connection, TLS, or URL failure before any status arrived.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status for status errors, `None` for transport/decode ones.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[async_trait]
pub trait RitualsApi: Send + Sync {
    /// Aggregated dashboard metrics for one team.
    async fn fetch_dashboard(&self, team_id: &str) -> Result<DashboardPayload, ApiError>;

    /// Post a test message to the connected Slack workspace.
    async fn send_slack_test(&self, channel: &str) -> Result<SlackTestReceipt, ApiError>;

    /// Request a local magic-link login (dev/test environments only).
    async fn request_dev_login(&self, email: &str) -> Result<LoginLink, ApiError>;

    /// Absolute URL that starts the Slack app install; the host navigates.
    fn slack_install_url(&self) -> String;

    /// Absolute checkout URL for a billing plan; the host navigates.
    fn billing_checkout_url(&self, plan: &str) -> String;
}
