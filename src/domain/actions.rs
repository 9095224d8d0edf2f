// Admin action response models

use serde::{Deserialize, Serialize};

/// Acknowledgement for a Slack test message. The endpoint may answer with
/// JSON (`{"detail": "Test message sent"}`) or a bare string; plain-text
/// bodies land in `detail` unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlackTestReceipt {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Response to a local magic-link request. `login_url` is only present in
/// non-production environments where the link is returned instead of
/// emailed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginLink {
    #[serde(default)]
    pub login_url: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
