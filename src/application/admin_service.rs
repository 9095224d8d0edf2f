// Admin service - one-shot integration and billing actions

use std::sync::Arc;

use crate::application::rituals_api::{ApiError, RitualsApi};
use crate::domain::actions::{LoginLink, SlackTestReceipt};

/// Billing plan used when the caller does not pick one.
pub const DEFAULT_PLAN: &str = "starter";

/// Stateless pass-throughs for the admin console. Each action is an
/// independent request; failures propagate verbatim for the caller to
/// present, and nothing here dedupes rapid repeat submissions.
#[derive(Clone)]
pub struct AdminService {
    api: Arc<dyn RitualsApi>,
}

impl AdminService {
    pub fn new(api: Arc<dyn RitualsApi>) -> Self {
        Self { api }
    }

    /// URL that starts the Slack app install. Navigating there is the
    /// host's side effect; from this layer it is just a URL.
    pub fn slack_install_url(&self) -> String {
        self.api.slack_install_url()
    }

    /// Post a test message to `channel` through the installed Slack app.
    pub async fn send_slack_test(&self, channel: &str) -> Result<SlackTestReceipt, ApiError> {
        self.api.send_slack_test(channel).await
    }

    /// Checkout URL for `plan`, defaulting to the starter tier.
    pub fn billing_checkout_url(&self, plan: Option<&str>) -> String {
        self.api.billing_checkout_url(plan.unwrap_or(DEFAULT_PLAN))
    }

    /// Request a local magic-link login. Dev/test environments only.
    pub async fn request_dev_login(&self, email: &str) -> Result<LoginLink, ApiError> {
        self.api.request_dev_login(email).await
    }
}
