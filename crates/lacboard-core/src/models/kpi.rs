//! KPI card model

use serde::{Deserialize, Serialize};

/// A labeled metric with a trend delta and its data source
///
/// `value` and `delta` are already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub source: String,
}

impl KpiCard {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        delta: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            delta: delta.into(),
            source: source.into(),
        }
    }
}
