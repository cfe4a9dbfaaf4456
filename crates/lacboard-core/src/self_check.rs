//! Startup self-check over the sample tables
//!
//! Failures are logged and collected; the check never panics and never
//! stops the dashboard from rendering.

use crate::filter::filter_events;
use crate::funnel::normalize_funnel;
use crate::models::{revenue_mix_total, EventItem, Genre, Venue};
use crate::sample::SampleData;
use serde::Serialize;
use tracing::{debug, warn};

/// Expected number of upcoming events in the sample
pub const EXPECTED_EVENT_COUNT: usize = 5;

/// Result of one assertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    /// What was observed when the check failed
    pub detail: Option<String>,
}

impl CheckOutcome {
    fn pass(name: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            detail: None,
        }
    }

    fn fail(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            detail: Some(detail.into()),
        }
    }
}

/// All outcomes of a self-check run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelfCheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SelfCheckReport {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// (passed, failed)
    pub fn counts(&self) -> (usize, usize) {
        let failed = self.failures().count();
        (self.outcomes.len() - failed, failed)
    }

    fn record(&mut self, outcome: CheckOutcome) {
        match &outcome.detail {
            Some(detail) if !outcome.passed => {
                warn!(check = %outcome.name, %detail, "Self-check failed");
            }
            _ => debug!(check = %outcome.name, "Self-check passed"),
        }
        self.outcomes.push(outcome);
    }
}

fn expect_single(
    name: &str,
    events: &[EventItem],
    genre: Option<Genre>,
    venue: Option<Venue>,
) -> CheckOutcome {
    let result = filter_events(
        events,
        genre.map(|g| g.as_str()).unwrap_or(""),
        venue.map(|v| v.as_str()).unwrap_or(""),
    );
    let fits = |e: &EventItem| {
        genre.map_or(true, |g| e.genre == g) && venue.map_or(true, |v| e.venue == v)
    };
    if result.len() == 1 && fits(&result[0]) {
        CheckOutcome::pass(name)
    } else {
        CheckOutcome::fail(name, format!("{} matching events", result.len()))
    }
}

/// Run every assertion against `data`
pub fn run_self_check(data: &SampleData) -> SelfCheckReport {
    let mut report = SelfCheckReport::default();
    let events = &data.events;

    report.record(if events.len() == EXPECTED_EVENT_COUNT {
        CheckOutcome::pass("event count")
    } else {
        CheckOutcome::fail("event count", format!("found {} events", events.len()))
    });

    report.record(expect_single("filter by genre Opera", events, Some(Genre::Opera), None));
    report.record(expect_single("filter by venue Sala 1", events, None, Some(Venue::Sala1)));
    report.record(expect_single(
        "combined filter Danza + Sala 1",
        events,
        Some(Genre::Danza),
        Some(Venue::Sala1),
    ));

    let disjoint = filter_events(events, Genre::Teatro.as_str(), Venue::Hall.as_str());
    report.record(if disjoint.is_empty() {
        CheckOutcome::pass("disjoint filter Teatro + Hall")
    } else {
        CheckOutcome::fail(
            "disjoint filter Teatro + Hall",
            format!("{} matching events", disjoint.len()),
        )
    });

    let funnel = normalize_funnel(&data.funnel);
    report.record(match funnel.first() {
        Some(first) if first.pct == 100 => CheckOutcome::pass("funnel first step at 100%"),
        Some(first) => CheckOutcome::fail("funnel first step at 100%", format!("{}%", first.pct)),
        None => CheckOutcome::fail("funnel first step at 100%", "funnel is empty"),
    });

    let mix_total = revenue_mix_total(&data.revenue_mix);
    report.record(if mix_total == 100 {
        CheckOutcome::pass("revenue mix sums to 100")
    } else {
        CheckOutcome::fail("revenue mix sums to 100", format!("sum is {}", mix_total))
    });

    report
}
