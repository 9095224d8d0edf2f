// Dashboard payload domain model

use serde::{Deserialize, Serialize};

use super::series::TimeSeries;
use super::summary::DashboardSummary;

/// Top-level unit returned by the dashboard data source. Atomic: either
/// fully the live payload or fully the fallback payload, never a mix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardPayload {
    #[serde(default)]
    pub series: Vec<TimeSeries>,
    #[serde(default)]
    pub summary: DashboardSummary,
}

impl DashboardPayload {
    pub fn new(series: Vec<TimeSeries>, summary: DashboardSummary) -> Self {
        Self { series, summary }
    }
}
