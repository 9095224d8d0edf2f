// Main entry point - Demo CLI that prints one team's dashboard
use std::sync::Arc;

use rituals_dashboard::{
    build_chart_rows, load_client_config, AdminService, ApiClient, DashboardService,
    SampleDashboard, WEEK_LABELS,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let team_id = std::env::args().nth(1).unwrap_or_else(|| "demo".to_string());

    // Load configuration
    let config = load_client_config(None)?;

    // Create the HTTP adapter (infrastructure layer)
    let api = Arc::new(ApiClient::new(&config)?);

    // Create the services (application layer)
    let service = DashboardService::new(api.clone(), Arc::new(SampleDashboard));
    let admin = AdminService::new(api);

    let payload = service.fetch_dashboard(&team_id).await;
    tracing::info!(
        "team {} risk level: {}",
        team_id,
        payload.summary.risk_level.as_str()
    );

    let rows = build_chart_rows(&payload.series, &WEEK_LABELS);

    let report = serde_json::json!({
        "team_id": team_id,
        "summary": payload.summary,
        "rows": rows,
        "links": {
            "slack_install": admin.slack_install_url(),
            "billing_checkout": admin.billing_checkout_url(None),
        },
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
