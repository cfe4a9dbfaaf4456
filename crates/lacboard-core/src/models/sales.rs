//! Sales series, conversion funnel and revenue mix

use serde::{Deserialize, Serialize};

/// One day of ticket sales
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPoint {
    /// Short weekday label ("Lun")
    pub day: String,
    pub tickets: u64,
    /// Revenue in CHF
    pub revenue: u64,
}

/// Raw funnel stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelStep {
    pub step: String,
    pub value: u64,
}

/// Funnel stage with its share of the largest stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelLevel {
    pub step: String,
    pub value: u64,
    /// 0..=100
    pub pct: u32,
}

/// Revenue mix slice, percentage of the total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSlice {
    pub name: String,
    pub value: u32,
}

/// Sum of the slice percentages (100 for a well-formed mix)
pub fn revenue_mix_total(mix: &[RevenueSlice]) -> u32 {
    mix.iter().map(|s| s.value).sum()
}
