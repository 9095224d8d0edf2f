// HTTP adapter for the rituals server API
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde_json::Value;

use crate::application::rituals_api::{ApiError, RitualsApi};
use crate::domain::actions::{LoginLink, SlackTestReceipt};
use crate::domain::payload::DashboardPayload;
use crate::infrastructure::config::ClientConfig;
use crate::infrastructure::csrf::{CookieCsrfSource, CsrfTokenSource};

/// Header carrying the CSRF token. Names compare case-insensitively, so
/// any caller spelling blocks injection.
pub const CSRF_HEADER: HeaderName = HeaderName::from_static("x-csrf-token");

const GENERIC_FAILURE: &str = "Request failed";

/// Body of a success response. Non-JSON bodies are kept as raw text
/// rather than treated as failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
    Empty,
}

/// Thin client over the rituals server. Sends cookies from a shared jar,
/// attaches the CSRF header, and normalizes error messages the way the
/// admin surfaces expect to display them.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    csrf: Arc<dyn CsrfTokenSource>,
    jar: Arc<Jar>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        // An empty base URL has no origin, so the cookie-backed source
        // will never find a token.
        let origin = Url::parse(&base_url).ok();
        let csrf = Arc::new(CookieCsrfSource::new(jar.clone(), origin));

        Ok(Self {
            http,
            base_url,
            csrf,
            jar,
        })
    }

    /// Replace the token source, for hosts that keep the CSRF token
    /// somewhere other than the shared cookie jar.
    pub fn with_token_source(mut self, csrf: Arc<dyn CsrfTokenSource>) -> Self {
        self.csrf = csrf;
        self
    }

    /// Cookie jar shared with the underlying HTTP client, so hosts can
    /// seed session cookies before the first request.
    pub fn cookie_jar(&self) -> Arc<Jar> {
        self.jar.clone()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one request. Caller headers are merged over the JSON
    /// default, and the CSRF header is attached from the token source
    /// unless the caller already supplied one under any capitalization.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Option<Value>,
    ) -> Result<ResponseBody, ApiError> {
        let mut merged = HeaderMap::new();
        merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        merged.extend(headers);

        if !merged.contains_key(&CSRF_HEADER) {
            if let Some(token) = self.csrf.token() {
                if let Ok(value) = HeaderValue::from_str(&token) {
                    merged.insert(CSRF_HEADER, value);
                }
            }
        }

        let url = self.endpoint(path);
        tracing::debug!("sending {} {}", method, url);

        let mut request = self.http.request(method, &url).headers(merged);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = parse_body(&text);

        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                message: failure_message(status, &body),
            });
        }

        Ok(body)
    }

    pub async fn get(&self, path: &str) -> Result<ResponseBody, ApiError> {
        self.request(Method::GET, path, HeaderMap::new(), None).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> Result<ResponseBody, ApiError> {
        self.request(Method::POST, path, HeaderMap::new(), Some(body))
            .await
    }
}

fn parse_body(text: &str) -> ResponseBody {
    if text.is_empty() {
        return ResponseBody::Empty;
    }

    match serde_json::from_str(text) {
        Ok(value) => ResponseBody::Json(value),
        Err(_) => ResponseBody::Text(text.to_string()),
    }
}

/// Message shown to the user for a failed request: the body's `detail`
/// string when present, then the status reason, then a generic fallback.
fn failure_message(status: StatusCode, body: &ResponseBody) -> String {
    if let ResponseBody::Json(value) = body {
        if let Some(detail) = value.get("detail").and_then(Value::as_str) {
            if !detail.is_empty() {
                return detail.to_string();
            }
        }
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

#[async_trait]
impl RitualsApi for ApiClient {
    async fn fetch_dashboard(&self, team_id: &str) -> Result<DashboardPayload, ApiError> {
        let path = format!("/api/dashboard/{}", urlencoding::encode(team_id));
        let payload = match self.get(&path).await? {
            ResponseBody::Json(value) => serde_json::from_value(value)?,
            // A success body that is not a JSON object cannot carry a
            // dashboard; parsing the raw text reports what was wrong.
            ResponseBody::Text(text) => serde_json::from_str(&text)?,
            ResponseBody::Empty => serde_json::from_str("")?,
        };

        Ok(payload)
    }

    async fn send_slack_test(&self, channel: &str) -> Result<SlackTestReceipt, ApiError> {
        let body = serde_json::json!({ "channel": channel });
        match self.post_json("/integrations/slack/test", body).await? {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
            ResponseBody::Text(text) => Ok(SlackTestReceipt { detail: Some(text) }),
            ResponseBody::Empty => Ok(SlackTestReceipt::default()),
        }
    }

    async fn request_dev_login(&self, email: &str) -> Result<LoginLink, ApiError> {
        let body = serde_json::json!({ "email": email });
        match self.post_json("/auth/request-link-local", body).await? {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
            ResponseBody::Text(text) => Ok(LoginLink {
                login_url: None,
                detail: Some(text),
            }),
            ResponseBody::Empty => Ok(LoginLink::default()),
        }
    }

    fn slack_install_url(&self) -> String {
        self.endpoint("/integrations/slack/start-install")
    }

    fn billing_checkout_url(&self, plan: &str) -> String {
        format!(
            "{}/billing/checkout?plan={}",
            self.base_url,
            urlencoding::encode(plan)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        let config = ClientConfig {
            base_url: base_url.to_string(),
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_parse_body_prefers_json() {
        assert_eq!(
            parse_body(r#"{"detail":"ok"}"#),
            ResponseBody::Json(serde_json::json!({"detail": "ok"}))
        );
        assert_eq!(
            parse_body("plain text"),
            ResponseBody::Text("plain text".to_string())
        );
        assert_eq!(parse_body(""), ResponseBody::Empty);
    }

    #[test]
    fn test_failure_message_prefers_body_detail() {
        let body = parse_body(r#"{"detail":"Team not found"}"#);
        assert_eq!(
            failure_message(StatusCode::NOT_FOUND, &body),
            "Team not found"
        );
    }

    #[test]
    fn test_failure_message_falls_back_to_status_reason() {
        let body = parse_body("<html>gateway</html>");
        assert_eq!(failure_message(StatusCode::BAD_GATEWAY, &body), "Bad Gateway");

        // Neither a non-string nor an empty detail qualifies as a message.
        let body = parse_body(r#"{"detail":{"code":7}}"#);
        assert_eq!(failure_message(StatusCode::FORBIDDEN, &body), "Forbidden");
        let body = parse_body(r#"{"detail":""}"#);
        assert_eq!(failure_message(StatusCode::FORBIDDEN, &body), "Forbidden");
    }

    #[test]
    fn test_failure_message_generic_when_status_has_no_reason() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(failure_message(status, &ResponseBody::Empty), "Request failed");
    }

    #[test]
    fn test_url_builders_trim_trailing_slash_and_encode_plan() {
        let client = client("http://rituals.test/");
        assert_eq!(
            client.slack_install_url(),
            "http://rituals.test/integrations/slack/start-install"
        );
        assert_eq!(
            client.billing_checkout_url("team plus"),
            "http://rituals.test/billing/checkout?plan=team%20plus"
        );
    }
}
