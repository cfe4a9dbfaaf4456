//! KPI recomputation from the filtered event subset

use crate::format::format_chf;
use crate::models::{EventItem, KpiCard};
use crate::sample::{BASE_PRESALE_REVENUE, FALLBACK_CRITICAL_EVENTS, FALLBACK_OCCUPANCY_PCT};

/// Lower bound of the revenue scale factor while filtering
pub const KPI_FACTOR_FLOOR: f64 = 0.15;

/// Delta text of recomputed cards while a filter is active
pub const FILTERED_DELTA: &str = "filtrato";

const OCCUPANCY_LABEL: &str = "Occupazione serata (Eventim)";
const REVENUE_LABEL: &str = "Ricavi Prevendite oggi";
const CRITICAL_LABEL: &str = "Eventi critici T-7/T-3";
const KPI_SOURCE: &str = "Eventim Inhouse";

/// Number of leading static cards replaced by recomputed ones
pub const RECOMPUTED_KPIS: usize = 3;

/// Share of matching events, floored, or 1 when nothing is filtered
pub fn scale_factor(filtered: usize, total: usize, filter_active: bool, floor: f64) -> f64 {
    if filter_active && total > 0 {
        (filtered as f64 / total as f64).max(floor)
    } else {
        1.0
    }
}

/// Mean occupancy in percent, or the fallback when the subset is empty
pub fn average_occupancy_pct(events: &[EventItem]) -> i64 {
    if events.is_empty() {
        return FALLBACK_OCCUPANCY_PCT;
    }
    let sum: f64 = events.iter().map(|e| e.occupancy).sum();
    (sum / events.len() as f64 * 100.0).round() as i64
}

/// Events below half capacity, or the fallback when the subset is empty
pub fn critical_event_count(events: &[EventItem]) -> usize {
    if events.is_empty() {
        return FALLBACK_CRITICAL_EVENTS;
    }
    events.iter().filter(|e| e.is_critical()).count()
}

/// KPI list for the current selection
///
/// The first three cards (occupancy, presale revenue, critical events) are
/// rebuilt from `filtered`; the remaining `base` cards follow unchanged.
pub fn compute_kpis(
    base: &[KpiCard],
    filtered: &[EventItem],
    total: usize,
    filter_active: bool,
) -> Vec<KpiCard> {
    let factor = scale_factor(filtered.len(), total, filter_active, KPI_FACTOR_FLOOR);
    let revenue = (BASE_PRESALE_REVENUE * factor).round() as i64;

    let delta = |unfiltered: &str| {
        if filter_active {
            FILTERED_DELTA.to_string()
        } else {
            unfiltered.to_string()
        }
    };

    let mut cards = vec![
        KpiCard::new(
            OCCUPANCY_LABEL,
            format!("{}%", average_occupancy_pct(filtered)),
            delta("+6% vs LW"),
            KPI_SOURCE,
        ),
        KpiCard::new(
            REVENUE_LABEL,
            format_chf(revenue),
            delta("+12% vs target"),
            KPI_SOURCE,
        ),
        KpiCard::new(
            CRITICAL_LABEL,
            critical_event_count(filtered).to_string(),
            delta("2 a T-7 · 1 a T-3"),
            KPI_SOURCE,
        ),
    ];
    cards.extend(base.iter().skip(RECOMPUTED_KPIS).cloned());
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_events;
    use crate::sample::{base_kpis, top_events};

    #[test]
    fn test_unfiltered_matches_static_cards() {
        let base = base_kpis();
        let events = top_events();
        let cards = compute_kpis(&base, &events, events.len(), false);

        assert_eq!(cards.len(), base.len());
        // Unfiltered the recomputed revenue and deltas equal the static ones
        assert_eq!(cards[1], base[1]);
        assert_eq!(cards[0].delta, base[0].delta);
        assert_eq!(cards[3..], base[3..]);
    }

    #[test]
    fn test_genre_filter() {
        let events = top_events();
        let opera = filter_events(&events, "Opera", "");
        let cards = compute_kpis(&base_kpis(), &opera, events.len(), true);

        assert_eq!(cards[0].value, "82%");
        assert_eq!(cards[1].value, "CHF 9’640");
        assert_eq!(cards[2].value, "0");
        assert!(cards[..3].iter().all(|c| c.delta == FILTERED_DELTA));
        assert_eq!(cards[3].delta, "−4 pt vs 7 gg");
    }

    #[test]
    fn test_empty_subset_uses_fallbacks_and_floor() {
        let events = top_events();
        let none = filter_events(&events, "Teatro", "Hall");
        let cards = compute_kpis(&base_kpis(), &none, events.len(), true);

        assert_eq!(cards[0].value, "72%");
        assert_eq!(cards[1].value, "CHF 7’230");
        assert_eq!(cards[2].value, "3");
    }

    #[test]
    fn test_scale_factor() {
        assert_eq!(scale_factor(1, 5, true, 0.15), 0.2);
        assert_eq!(scale_factor(0, 5, true, 0.15), 0.15);
        assert_eq!(scale_factor(0, 5, false, 0.15), 1.0);
        assert_eq!(scale_factor(0, 0, true, 0.15), 1.0);
    }

    #[test]
    fn test_critical_count_all_events() {
        // Teatro 0.44 and Family 0.39
        assert_eq!(critical_event_count(&top_events()), 2);
        assert_eq!(average_occupancy_pct(&top_events()), 56);
    }
}
