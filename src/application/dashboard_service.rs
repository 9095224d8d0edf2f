// Dashboard service - fetch with degrade-to-sample fallback

use std::sync::Arc;

use crate::application::fallback::FallbackSource;
use crate::application::rituals_api::RitualsApi;
use crate::domain::payload::DashboardPayload;

#[derive(Clone)]
pub struct DashboardService {
    api: Arc<dyn RitualsApi>,
    fallback: Arc<dyn FallbackSource>,
}

impl DashboardService {
    pub fn new(api: Arc<dyn RitualsApi>, fallback: Arc<dyn FallbackSource>) -> Self {
        Self { api, fallback }
    }

    /// Fetch the dashboard for a team. Never fails: any API error is
    /// absorbed into the fallback payload so the surface always has
    /// something to render. No retry and no memoization happen first.
    pub async fn fetch_dashboard(&self, team_id: &str) -> DashboardPayload {
        match self.api.fetch_dashboard(team_id).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!("falling back to sample dashboard data for {}: {}", team_id, err);
                self.fallback.dashboard()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fallback::SampleDashboard;
    use crate::application::rituals_api::ApiError;
    use crate::domain::actions::{LoginLink, SlackTestReceipt};
    use crate::domain::summary::RiskLevel;
    use async_trait::async_trait;

    struct StubApi {
        payload: Option<DashboardPayload>,
    }

    #[async_trait]
    impl RitualsApi for StubApi {
        async fn fetch_dashboard(&self, _team_id: &str) -> Result<DashboardPayload, ApiError> {
            match &self.payload {
                Some(payload) => Ok(payload.clone()),
                None => Err(ApiError::Status {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    message: "boom".to_string(),
                }),
            }
        }

        async fn send_slack_test(&self, _channel: &str) -> Result<SlackTestReceipt, ApiError> {
            unimplemented!("not used by these tests")
        }

        async fn request_dev_login(&self, _email: &str) -> Result<LoginLink, ApiError> {
            unimplemented!("not used by these tests")
        }

        fn slack_install_url(&self) -> String {
            unimplemented!("not used by these tests")
        }

        fn billing_checkout_url(&self, _plan: &str) -> String {
            unimplemented!("not used by these tests")
        }
    }

    fn service(payload: Option<DashboardPayload>) -> DashboardService {
        DashboardService::new(Arc::new(StubApi { payload }), Arc::new(SampleDashboard))
    }

    #[tokio::test]
    async fn test_live_payload_passes_through_unchanged() {
        let mut live = SampleDashboard.dashboard();
        live.summary.risk_level = RiskLevel::High;
        live.summary.source = Some("live".to_string());

        let fetched = service(Some(live.clone())).fetch_dashboard("7").await;
        assert_eq!(fetched, live);
    }

    #[tokio::test]
    async fn test_api_error_yields_sample_payload() {
        let fetched = service(None).fetch_dashboard("7").await;
        assert_eq!(fetched, SampleDashboard.dashboard());
    }
}
