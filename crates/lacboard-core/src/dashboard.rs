//! Dashboard state: sample data + current filter + derived view
//!
//! Derived values are recomputed only when the filter changes, so frontends
//! can read `view()` on every frame.

use crate::filter::EventFilter;
use crate::funnel::normalize_funnel;
use crate::heatmap::{generate_heatmap, scale_heatmap, DEFAULT_HEATMAP_SEED, HEATMAP_DAYS};
use crate::kpi::compute_kpis;
use crate::models::{EventItem, FunnelLevel, HeatmapDay, KpiCard};
use crate::sample::SampleData;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// Options fixed for the lifetime of a dashboard
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub heatmap_seed: u64,
    pub heatmap_start: NaiveDate,
    pub heatmap_days: u32,
}

impl DashboardConfig {
    /// Default seed and window, starting at `start`
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            heatmap_seed: DEFAULT_HEATMAP_SEED,
            heatmap_start: start,
            heatmap_days: HEATMAP_DAYS,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.heatmap_seed = seed;
        self
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::starting(chrono::Local::now().date_naive())
    }
}

/// Values derived from the current filter
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub filter: EventFilter,
    pub filter_active: bool,
    pub kpis: Vec<KpiCard>,
    pub events: Vec<EventItem>,
    pub heatmap: Vec<HeatmapDay>,
}

/// Full derived snapshot, used for JSON export
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub view: &'a DashboardView,
    pub funnel: &'a [FunnelLevel],
    pub data: &'a SampleData,
}

/// Dashboard state owned by a frontend
pub struct DashboardState {
    data: SampleData,
    heatmap: Vec<HeatmapDay>,
    funnel: Vec<FunnelLevel>,
    filter: EventFilter,
    view: DashboardView,
}

impl DashboardState {
    pub fn new(data: SampleData, config: &DashboardConfig) -> Self {
        let heatmap = generate_heatmap(
            config.heatmap_seed,
            config.heatmap_start,
            config.heatmap_days,
        );
        let funnel = normalize_funnel(&data.funnel);
        let filter = EventFilter::default();
        let view = derive_view(&data, &heatmap, &filter);

        debug!(
            seed = config.heatmap_seed,
            start = %config.heatmap_start,
            "Dashboard state initialized"
        );

        Self {
            data,
            heatmap,
            funnel,
            filter,
            view,
        }
    }

    /// Preview tables with the given config
    pub fn preview(config: &DashboardConfig) -> Self {
        Self::new(SampleData::lac_preview(), config)
    }

    pub fn data(&self) -> &SampleData {
        &self.data
    }

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    /// Normalized funnel (independent of the filter)
    pub fn funnel(&self) -> &[FunnelLevel] {
        &self.funnel
    }

    /// Heatmap as generated, before filter scaling
    pub fn raw_heatmap(&self) -> &[HeatmapDay] {
        &self.heatmap
    }

    pub fn snapshot(&self) -> DashboardSnapshot<'_> {
        DashboardSnapshot {
            view: &self.view,
            funnel: &self.funnel,
            data: &self.data,
        }
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        let genre = genre.into();
        if self.filter.genre != genre {
            self.filter.genre = genre;
            self.recompute();
        }
    }

    pub fn set_venue(&mut self, venue: impl Into<String>) {
        let venue = venue.into();
        if self.filter.venue != venue {
            self.filter.venue = venue;
            self.recompute();
        }
    }

    pub fn set_filter(&mut self, filter: EventFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.recompute();
        }
    }

    pub fn clear_filters(&mut self) {
        if self.filter.is_active() {
            self.filter.clear();
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.view = derive_view(&self.data, &self.heatmap, &self.filter);
        debug!(
            genre = %self.filter.genre,
            venue = %self.filter.venue,
            matching = self.view.events.len(),
            "Dashboard view recomputed"
        );
    }
}

fn derive_view(data: &SampleData, heatmap: &[HeatmapDay], filter: &EventFilter) -> DashboardView {
    let events = filter.apply(&data.events);
    let total = data.events.len();
    let active = filter.is_active();

    DashboardView {
        filter: filter.clone(),
        filter_active: active,
        kpis: compute_kpis(&data.kpis, &events, total, active),
        heatmap: scale_heatmap(heatmap, events.len(), total, active),
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DashboardState {
        let start = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
        DashboardState::preview(&DashboardConfig::starting(start))
    }

    #[test]
    fn test_initial_view_is_unfiltered() {
        let state = state();
        let view = state.view();
        assert!(!view.filter_active);
        assert_eq!(view.events.len(), 5);
        assert_eq!(view.heatmap, state.raw_heatmap());
        assert_eq!(view.kpis[1].value, "CHF 48’200");
    }

    #[test]
    fn test_set_genre_recomputes() {
        let mut state = state();
        state.set_genre("Danza");
        let view = state.view();
        assert!(view.filter_active);
        assert_eq!(view.events.len(), 1);
        assert_eq!(view.kpis[0].value, "61%");
        assert_eq!(view.kpis[0].delta, "filtrato");
    }

    #[test]
    fn test_clear_filters_restores_view() {
        let mut state = state();
        let before = state.view().kpis.clone();
        state.set_venue("Hall");
        assert_ne!(state.view().kpis, before);
        state.clear_filters();
        assert_eq!(state.view().kpis, before);
        assert!(!state.filter().is_active());
    }

    #[test]
    fn test_funnel_is_precomputed() {
        let state = state();
        let pcts: Vec<u32> = state.funnel().iter().map(|l| l.pct).collect();
        assert_eq!(pcts, vec![100, 15, 2, 2]);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = state();
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["view"]["events"].as_array().unwrap().len(), 5);
        assert_eq!(json["funnel"][0]["pct"], 100);
        assert_eq!(json["data"]["revenue_mix"][0]["name"], "Biglietti");
    }
}
