//! Integration tests for the event filter and funnel normalization

use lacboard_core::models::{FunnelStep, Genre, Venue};
use lacboard_core::sample::{funnel, revenue_mix, top_events};
use lacboard_core::{filter_events, normalize_funnel, EventFilter};

#[test]
fn test_every_pair_narrows_by_conjunction() {
    let events = top_events();

    let genres: Vec<&str> = std::iter::once("")
        .chain(Genre::all().iter().map(|g| g.as_str()))
        .collect();
    let venues: Vec<&str> = std::iter::once("")
        .chain(Venue::all().iter().map(|v| v.as_str()))
        .collect();

    for genre in &genres {
        for venue in &venues {
            let result = filter_events(&events, genre, venue);
            for e in &result {
                if !genre.is_empty() {
                    assert!(e.genre.as_str().eq_ignore_ascii_case(genre));
                }
                if !venue.is_empty() {
                    assert_eq!(e.venue.as_str().to_lowercase(), venue.to_lowercase());
                }
            }
            // Conjunction never returns more than either side alone
            assert!(result.len() <= filter_events(&events, genre, "").len());
            assert!(result.len() <= filter_events(&events, "", venue).len());

            let expected: Vec<_> = events
                .iter()
                .filter(|e| EventFilter::new(*genre, *venue).matches(e))
                .cloned()
                .collect();
            assert_eq!(result, expected);
        }
    }
}

#[test]
fn test_reference_scenarios() {
    let events = top_events();
    assert_eq!(events.len(), 5);

    let opera = filter_events(&events, "Opera", "");
    assert_eq!(opera.len(), 1);
    assert_eq!(opera[0].genre, Genre::Opera);

    let sala1 = filter_events(&events, "", "Sala 1");
    assert_eq!(sala1.len(), 1);
    assert_eq!(sala1[0].venue, Venue::Sala1);

    let both = filter_events(&events, "Danza", "Sala 1");
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].genre, Genre::Danza);
    assert_eq!(both[0].venue, Venue::Sala1);

    assert!(filter_events(&events, "Teatro", "Hall").is_empty());
}

#[test]
fn test_lowercase_accented_venue() {
    let events = top_events();
    let agora = filter_events(&events, "", "agorà");
    assert_eq!(agora.len(), 1);
    assert_eq!(agora[0].genre, Genre::Family);
}

#[test]
fn test_reference_funnel_percentages() {
    let pcts: Vec<u32> = normalize_funnel(&funnel()).iter().map(|l| l.pct).collect();
    assert_eq!(pcts, vec![100, 15, 2, 2]);
}

#[test]
fn test_funnel_maximum_always_100() {
    let inputs: [&[u64]; 4] = [&[1], &[3, 9, 4], &[0, 0, 7], &[5, 5]];
    for values in inputs {
        let steps: Vec<FunnelStep> = values
            .iter()
            .map(|&value| FunnelStep {
                step: "s".to_string(),
                value,
            })
            .collect();
        let levels = normalize_funnel(&steps);
        assert!(levels.iter().any(|l| l.pct == 100));
        assert!(levels.iter().all(|l| l.pct <= 100));
    }
}

#[test]
fn test_revenue_mix_sums_to_100() {
    let total: u32 = revenue_mix().iter().map(|s| s.value).sum();
    assert_eq!(total, 100);
}
