//! Genre/venue filter over the event list

use crate::error::CoreError;
use crate::models::{EventItem, Genre, Venue};
use serde::{Deserialize, Serialize};

/// Case-insensitive equality; an empty wanted value matches everything
fn field_matches(actual: &str, wanted: &str) -> bool {
    wanted.is_empty() || actual.to_lowercase() == wanted.to_lowercase()
}

/// Events whose genre and venue match the given values
///
/// Empty strings act as wildcards, both filters combine by conjunction,
/// input order is preserved. An empty result is valid.
pub fn filter_events(events: &[EventItem], genre: &str, venue: &str) -> Vec<EventItem> {
    events
        .iter()
        .filter(|e| field_matches(e.genre.as_str(), genre) && field_matches(e.venue.as_str(), venue))
        .cloned()
        .collect()
}

/// Current filter selection (empty string = no filter)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    pub genre: String,
    pub venue: String,
}

impl EventFilter {
    pub fn new(genre: impl Into<String>, venue: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            venue: venue.into(),
        }
    }

    /// Build from CLI values, rejecting names outside the fixed enumerations
    pub fn validated(genre: Option<&str>, venue: Option<&str>) -> Result<Self, CoreError> {
        let genre = match genre.map(str::trim).filter(|g| !g.is_empty()) {
            Some(g) => Genre::parse(g)
                .ok_or_else(|| CoreError::UnknownGenre {
                    value: g.to_string(),
                    expected: join_names(Genre::all().iter().map(|g| g.as_str())),
                })?
                .as_str()
                .to_string(),
            None => String::new(),
        };
        let venue = match venue.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => Venue::parse(v)
                .ok_or_else(|| CoreError::UnknownVenue {
                    value: v.to_string(),
                    expected: join_names(Venue::all().iter().map(|v| v.as_str())),
                })?
                .as_str()
                .to_string(),
            None => String::new(),
        };
        Ok(Self { genre, venue })
    }

    pub fn is_active(&self) -> bool {
        !self.genre.is_empty() || !self.venue.is_empty()
    }

    pub fn matches(&self, event: &EventItem) -> bool {
        field_matches(event.genre.as_str(), &self.genre)
            && field_matches(event.venue.as_str(), &self.venue)
    }

    pub fn apply(&self, events: &[EventItem]) -> Vec<EventItem> {
        filter_events(events, &self.genre, &self.venue)
    }

    pub fn clear(&mut self) {
        self.genre.clear();
        self.venue.clear();
    }

    /// Chip labels for the active parts ("Genere: Opera", "Venue: Hall")
    pub fn describe(&self) -> Vec<String> {
        let mut chips = Vec::new();
        if !self.genre.is_empty() {
            chips.push(format!("Genere: {}", self.genre));
        }
        if !self.venue.is_empty() {
            chips.push(format!("Venue: {}", self.venue));
        }
        chips
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::top_events;

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let events = top_events();
        assert_eq!(filter_events(&events, "", ""), events);
    }

    #[test]
    fn test_genre_match_ignores_case() {
        let events = top_events();
        let result = filter_events(&events, "oPeRa", "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].genre, Genre::Opera);
    }

    #[test]
    fn test_unknown_strings_yield_empty() {
        let events = top_events();
        assert!(filter_events(&events, "Jazz", "").is_empty());
        assert!(filter_events(&events, "", "Sala 9").is_empty());
    }

    #[test]
    fn test_validated_normalizes_case() {
        let filter = EventFilter::validated(Some("danza"), Some("SALA 1")).unwrap();
        assert_eq!(filter, EventFilter::new("Danza", "Sala 1"));
        assert!(filter.is_active());
    }

    #[test]
    fn test_validated_rejects_unknown_venue() {
        let err = EventFilter::validated(None, Some("Arena")).unwrap_err();
        assert!(matches!(err, CoreError::UnknownVenue { .. }));
        assert!(err.to_string().contains("Sala Teatro"));
    }

    #[test]
    fn test_validated_blank_is_no_filter() {
        let filter = EventFilter::validated(Some("  "), None).unwrap();
        assert!(!filter.is_active());
    }

    #[test]
    fn test_describe_and_clear() {
        let mut filter = EventFilter::new("Opera", "Hall");
        assert_eq!(filter.describe(), vec!["Genere: Opera", "Venue: Hall"]);
        filter.clear();
        assert!(filter.describe().is_empty());
        assert!(!filter.is_active());
    }
}
