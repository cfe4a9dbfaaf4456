//! Upcoming events and their classification (genre, venue, risk tier)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sales health tier of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    Mid,
    High,
}

impl Risk {
    /// Badge label shown next to the event
    pub fn label(&self) -> &'static str {
        match self {
            Risk::Low => "Basso",
            Risk::Mid => "Medio",
            Risk::High => "Alto",
        }
    }
}

/// Programme genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Opera,
    Teatro,
    Danza,
    Musica,
    Family,
}

impl Genre {
    pub fn all() -> &'static [Genre] {
        &[
            Genre::Opera,
            Genre::Teatro,
            Genre::Danza,
            Genre::Musica,
            Genre::Family,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Opera => "Opera",
            Genre::Teatro => "Teatro",
            Genre::Danza => "Danza",
            Genre::Musica => "Musica",
            Genre::Family => "Family",
        }
    }

    /// Case-insensitive lookup
    pub fn parse(value: &str) -> Option<Genre> {
        let needle = value.trim().to_lowercase();
        Genre::all()
            .iter()
            .copied()
            .find(|g| g.as_str().to_lowercase() == needle)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Hall or open-air space of the venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    #[serde(rename = "Sala Teatro")]
    SalaTeatro,
    Hall,
    #[serde(rename = "Sala 1")]
    Sala1,
    #[serde(rename = "Sala 2")]
    Sala2,
    #[serde(rename = "Sala 3")]
    Sala3,
    #[serde(rename = "Sala 4")]
    Sala4,
    #[serde(rename = "Agorà")]
    Agora,
    Chiostro,
    Piazza,
}

impl Venue {
    pub fn all() -> &'static [Venue] {
        &[
            Venue::SalaTeatro,
            Venue::Hall,
            Venue::Sala1,
            Venue::Sala2,
            Venue::Sala3,
            Venue::Sala4,
            Venue::Agora,
            Venue::Chiostro,
            Venue::Piazza,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::SalaTeatro => "Sala Teatro",
            Venue::Hall => "Hall",
            Venue::Sala1 => "Sala 1",
            Venue::Sala2 => "Sala 2",
            Venue::Sala3 => "Sala 3",
            Venue::Sala4 => "Sala 4",
            Venue::Agora => "Agorà",
            Venue::Chiostro => "Chiostro",
            Venue::Piazza => "Piazza",
        }
    }

    /// Case-insensitive lookup
    pub fn parse(value: &str) -> Option<Venue> {
        let needle = value.trim().to_lowercase();
        Venue::all()
            .iter()
            .copied()
            .find(|v| v.as_str().to_lowercase() == needle)
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A scheduled performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    pub title: String,
    /// Short display date ("Ven 24")
    pub date: String,
    /// Fraction of capacity sold, 0.0..=1.0
    pub occupancy: f64,
    pub risk: Risk,
    pub venue: Venue,
    pub genre: Genre,
}

impl EventItem {
    /// Occupancy as a rounded percentage
    pub fn occupancy_pct(&self) -> u32 {
        (self.occupancy * 100.0).round().max(0.0) as u32
    }

    /// Below half capacity
    pub fn is_critical(&self) -> bool {
        self.occupancy < 0.5
    }
}
