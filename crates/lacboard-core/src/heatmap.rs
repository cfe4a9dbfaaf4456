//! Seeded heatmap generation and filter-driven intensity scaling

use crate::kpi::scale_factor;
use crate::models::{HeatmapDay, HeatmapSlot, SLOT_LABELS};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Days covered by the heatmap
pub const HEATMAP_DAYS: u32 = 14;

/// Seed used when neither preferences nor CLI provide one
pub const DEFAULT_HEATMAP_SEED: u64 = 2526;

/// Probability of an ops flag on a slot
pub const OPS_FLAG_PROBABILITY: f64 = 0.15;

/// Lower bound of the intensity scale factor while filtering
pub const HEATMAP_FACTOR_FLOOR: f64 = 0.2;

/// Build `days` consecutive days starting at `start`, three slots each
///
/// Intensities are uniform in [0, 1). The same seed always produces the
/// same heatmap.
pub fn generate_heatmap(seed: u64, start: NaiveDate, days: u32) -> Vec<HeatmapDay> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..days)
        .map(|i| {
            let slots = SLOT_LABELS
                .iter()
                .map(|label| HeatmapSlot {
                    label: (*label).to_string(),
                    value: rng.gen::<f64>(),
                    ops: rng.gen_bool(OPS_FLAG_PROBABILITY),
                })
                .collect();
            HeatmapDay {
                day: i + 1,
                date: start + Duration::days(i64::from(i)),
                slots,
            }
        })
        .collect()
}

/// Rescale intensities by how much of the programme the filter keeps
///
/// `min(1, value * (0.5 + 0.5 * factor))`; unfiltered the factor is 1 and
/// values pass through unchanged.
pub fn scale_heatmap(
    days: &[HeatmapDay],
    filtered: usize,
    total: usize,
    filter_active: bool,
) -> Vec<HeatmapDay> {
    let factor = scale_factor(filtered, total, filter_active, HEATMAP_FACTOR_FLOOR);
    let multiplier = 0.5 + 0.5 * factor;

    days.iter()
        .map(|d| HeatmapDay {
            slots: d
                .slots
                .iter()
                .map(|s| HeatmapSlot {
                    value: (s.value * multiplier).clamp(0.0, 1.0),
                    ..s.clone()
                })
                .collect(),
            ..d.clone()
        })
        .collect()
}

/// Italian short weekday label used in day headers ("Lun".."Dom")
pub fn weekday_label(date: NaiveDate) -> &'static str {
    use chrono::{Datelike, Weekday};
    match date.weekday() {
        Weekday::Mon => "Lun",
        Weekday::Tue => "Mar",
        Weekday::Wed => "Mer",
        Weekday::Thu => "Gio",
        Weekday::Fri => "Ven",
        Weekday::Sat => "Sab",
        Weekday::Sun => "Dom",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 20).unwrap()
    }

    #[test]
    fn test_same_seed_same_heatmap() {
        let a = generate_heatmap(7, start(), HEATMAP_DAYS);
        let b = generate_heatmap(7, start(), HEATMAP_DAYS);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shape_and_dates() {
        let days = generate_heatmap(DEFAULT_HEATMAP_SEED, start(), HEATMAP_DAYS);
        assert_eq!(days.len(), 14);
        assert_eq!(days[0].day, 1);
        assert_eq!(days[13].day, 14);
        assert_eq!(days[13].date, NaiveDate::from_ymd_opt(2025, 11, 2).unwrap());
        for d in &days {
            let labels: Vec<_> = d.slots.iter().map(|s| s.label.as_str()).collect();
            assert_eq!(labels, SLOT_LABELS);
            assert!(d.slots.iter().all(|s| (0.0..1.0).contains(&s.value)));
        }
    }

    #[test]
    fn test_unfiltered_scaling_is_identity() {
        let days = generate_heatmap(1, start(), HEATMAP_DAYS);
        assert_eq!(scale_heatmap(&days, 5, 5, false), days);
    }

    #[test]
    fn test_filtered_scaling_uses_floor() {
        let days = generate_heatmap(1, start(), 3);
        let scaled = scale_heatmap(&days, 0, 5, true);
        for (orig, new) in days.iter().zip(&scaled) {
            for (o, n) in orig.slots.iter().zip(&new.slots) {
                assert!((n.value - o.value * 0.6).abs() < 1e-12);
                assert_eq!(n.ops, o.ops);
            }
        }
    }

    #[test]
    fn test_scaling_stays_in_unit_range() {
        let day = HeatmapDay {
            day: 1,
            date: start(),
            slots: vec![HeatmapSlot {
                label: "Sera".to_string(),
                value: 1.0,
                ops: false,
            }],
        };
        for filtered in 0..=5 {
            let scaled = scale_heatmap(std::slice::from_ref(&day), filtered, 5, true);
            let v = scaled[0].slots[0].value;
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_weekday_label() {
        // 2025-10-20 is a Monday
        assert_eq!(weekday_label(start()), "Lun");
        assert_eq!(weekday_label(start() + Duration::days(6)), "Dom");
    }
}
