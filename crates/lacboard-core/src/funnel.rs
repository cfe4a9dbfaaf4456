//! Funnel normalization against the largest stage

use crate::models::{FunnelLevel, FunnelStep};

/// Attach to each step its rounded share of the largest step
///
/// The step holding the maximum gets 100. When every value is zero all
/// shares are 0 instead of dividing by zero.
pub fn normalize_funnel(steps: &[FunnelStep]) -> Vec<FunnelLevel> {
    let max = steps.iter().map(|s| s.value).max().unwrap_or(0);

    steps
        .iter()
        .map(|s| {
            let pct = if max == 0 {
                0
            } else {
                (s.value as f64 / max as f64 * 100.0).round() as u32
            };
            FunnelLevel {
                step: s.step.clone(),
                value: s.value,
                pct,
            }
        })
        .collect()
}
