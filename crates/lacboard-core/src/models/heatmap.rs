//! Heatmap of the upcoming days, three slots per day

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Slot labels in display order (morning, afternoon, evening)
pub const SLOT_LABELS: [&str; 3] = ["Matt", "Pome", "Sera"];

/// One time slot of a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapSlot {
    pub label: String,
    /// Load intensity, 0.0..=1.0
    pub value: f64,
    /// Operational issue flagged (staff, set-up, weather)
    pub ops: bool,
}

/// One day column of the heatmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapDay {
    /// 1-based position in the window
    pub day: u32,
    pub date: NaiveDate,
    pub slots: Vec<HeatmapSlot>,
}

impl HeatmapDay {
    /// Slots flagged for operations
    pub fn ops_count(&self) -> usize {
        self.slots.iter().filter(|s| s.ops).count()
    }
}
