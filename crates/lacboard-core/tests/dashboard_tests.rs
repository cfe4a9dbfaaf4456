//! Integration tests for the dashboard state and derived view

use chrono::NaiveDate;
use lacboard_core::{run_self_check, DashboardConfig, DashboardState, EventFilter};

fn dashboard(seed: u64) -> DashboardState {
    let start = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
    DashboardState::preview(&DashboardConfig::starting(start).with_seed(seed))
}

#[test]
fn test_kpis_follow_filter() {
    let mut state = dashboard(1);

    let kpis = &state.view().kpis;
    assert_eq!(kpis.len(), 8);
    assert_eq!(kpis[0].value, "56%");
    assert_eq!(kpis[1].value, "CHF 48’200");
    assert_eq!(kpis[2].value, "2");

    state.set_genre("Opera");
    let kpis = &state.view().kpis;
    assert_eq!(kpis[0].value, "82%");
    assert_eq!(kpis[1].value, "CHF 9’640");
    assert_eq!(kpis[2].value, "0");

    state.set_filter(EventFilter::new("Teatro", "Hall"));
    let view = state.view();
    assert!(view.events.is_empty());
    assert_eq!(view.kpis[0].value, "72%");
    assert_eq!(view.kpis[1].value, "CHF 7’230");
    assert_eq!(view.kpis[2].value, "3");
}

#[test]
fn test_single_match_kpis() {
    let mut state = dashboard(1);
    // Family runs at 39%
    state.set_genre("Family");
    assert_eq!(state.view().kpis[2].value, "1");
    state.clear_filters();
    state.set_venue("Sala 2");
    // 1/5 = 0.2 -> 48200 * 0.2
    assert_eq!(state.view().kpis[1].value, "CHF 9’640");
}

#[test]
fn test_heatmap_scaling_follows_filter() {
    let mut state = dashboard(99);
    let raw = state.raw_heatmap().to_vec();

    state.set_genre("Musica");
    for (r, s) in raw.iter().zip(&state.view().heatmap) {
        for (rs, ss) in r.slots.iter().zip(&s.slots) {
            // factor 0.2 -> multiplier 0.6
            assert!((ss.value - rs.value * 0.6).abs() < 1e-12);
            assert!((0.0..=1.0).contains(&ss.value));
        }
    }
}

#[test]
fn test_same_seed_same_dashboard() {
    assert_eq!(dashboard(5).raw_heatmap(), dashboard(5).raw_heatmap());
    assert_ne!(dashboard(5).raw_heatmap(), dashboard(6).raw_heatmap());
}

#[test]
fn test_self_check_on_preview() {
    let state = dashboard(1);
    assert!(run_self_check(state.data()).all_passed());
}
