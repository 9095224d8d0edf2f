// Fallback dashboard data - the degrade-to-demo policy

use crate::domain::payload::DashboardPayload;
use crate::domain::series::TimeSeries;
use crate::domain::summary::{DashboardSummary, RiskLevel};

/// Source of the payload served when the live fetch fails. A strategy,
/// not a cache: the service calls it fresh on every failure and never
/// exposes which source produced a payload.
pub trait FallbackSource: Send + Sync {
    fn dashboard(&self) -> DashboardPayload;
}

/// The stock demo week shown whenever live metrics are unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDashboard;

impl FallbackSource for SampleDashboard {
    fn dashboard(&self) -> DashboardPayload {
        DashboardPayload::new(
            vec![
                TimeSeries::from_values(
                    "Mood".to_string(),
                    &[72.0, 68.0, 74.0, 70.0, 75.0, 77.0, 80.0],
                ),
                TimeSeries::from_values(
                    "Stress".to_string(),
                    &[45.0, 50.0, 48.0, 52.0, 49.0, 47.0, 44.0],
                ),
            ],
            DashboardSummary {
                risk_level: RiskLevel::Low,
                participation: Some(78.0),
                sentiment: Some(74.0),
                highlights: vec![
                    "Team engagement trending upward week over week".to_string(),
                    "Stress reports declining following wellness initiative".to_string(),
                    "Upcoming leadership AMA scheduled for Friday".to_string(),
                ],
                ..DashboardSummary::default()
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{build_chart_rows, WEEK_LABELS};

    #[test]
    fn test_sample_payload_is_deterministic() {
        assert_eq!(SampleDashboard.dashboard(), SampleDashboard.dashboard());
    }

    #[test]
    fn test_sample_payload_covers_the_full_week() {
        let payload = SampleDashboard.dashboard();
        assert_eq!(payload.series.len(), 2);
        assert!(payload.series.iter().all(|s| s.data.len() == 7));
        assert_eq!(payload.summary.risk_level, RiskLevel::Low);
        assert_eq!(payload.summary.participation, Some(78.0));
        assert_eq!(payload.summary.sentiment, Some(74.0));
        assert_eq!(payload.summary.highlights.len(), 3);
        assert_eq!(payload.summary.active_rituals, None);

        let rows = build_chart_rows(&payload.series, &WEEK_LABELS);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].value("Mood"), Some(72.0));
        assert_eq!(rows[6].value("Stress"), Some(44.0));
    }
}
