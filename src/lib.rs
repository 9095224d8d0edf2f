// Rituals dashboard client - data layer behind the team dashboard UI
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::admin_service::{AdminService, DEFAULT_PLAN};
pub use application::dashboard_service::DashboardService;
pub use application::fallback::{FallbackSource, SampleDashboard};
pub use application::rituals_api::{ApiError, RitualsApi};
pub use domain::actions::{LoginLink, SlackTestReceipt};
pub use domain::chart::{build_chart_rows, week_labels_ending, ChartRow, WEEK_LABELS};
pub use domain::payload::DashboardPayload;
pub use domain::series::TimeSeries;
pub use domain::summary::{DashboardSummary, RiskLevel, TeamRef};
pub use infrastructure::api_client::{ApiClient, ResponseBody, CSRF_HEADER};
pub use infrastructure::config::{load_client_config, ClientConfig};
pub use infrastructure::csrf::{read_csrf_cookie, CookieCsrfSource, CsrfTokenSource};
