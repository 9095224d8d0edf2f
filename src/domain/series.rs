// Time series domain model

use serde::{Deserialize, Serialize};

/// One named metric sampled once per day over the dashboard window.
/// Days without a sample are `None` and stay `None` after receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub name: String,
    #[serde(default)]
    pub data: Vec<Option<f64>>,
}

impl TimeSeries {
    pub fn new(name: String, data: Vec<Option<f64>>) -> Self {
        Self { name, data }
    }

    /// Build a fully sampled series from plain values.
    pub fn from_values(name: String, values: &[f64]) -> Self {
        Self {
            name,
            data: values.iter().copied().map(Some).collect(),
        }
    }

    /// Sample at a day index, if the day exists and was sampled.
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied().flatten()
    }
}
