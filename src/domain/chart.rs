// Chart reshaping - pivots named series into row-per-day tables

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::series::TimeSeries;

/// Fixed label set for the weekly chart, Monday first.
pub const WEEK_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One chart row: the day label plus one `number|null` entry per series,
/// keyed by series name in series input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub name: String,
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

impl ChartRow {
    pub fn new(name: String) -> Self {
        Self {
            name,
            values: Map::new(),
        }
    }

    /// Numeric value for a series in this row, if sampled that day.
    pub fn value(&self, series: &str) -> Option<f64> {
        self.values.get(series).and_then(Value::as_f64)
    }
}

/// Pivot `series` into one row per day label, in label order.
///
/// Always returns exactly `day_labels.len()` rows: series shorter than the
/// label window read as `null` past their end, longer series are truncated
/// positionally. Zero series yields rows carrying only the label.
pub fn build_chart_rows<S: AsRef<str>>(series: &[TimeSeries], day_labels: &[S]) -> Vec<ChartRow> {
    day_labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let mut row = ChartRow::new(label.as_ref().to_string());
            for entry in series {
                row.values.insert(
                    entry.name.clone(),
                    entry.value_at(index).map_or(Value::Null, Value::from),
                );
            }
            row
        })
        .collect()
}

/// Labels for the seven days ending at `end`, matching the trailing window
/// the API aggregates over. Ending on a Wednesday gives Thu..Wed.
pub fn week_labels_ending(end: NaiveDate) -> [String; 7] {
    std::array::from_fn(|offset| {
        (end - chrono::Days::new((6 - offset) as u64))
            .format("%a")
            .to_string()
    })
}
