//! Operational content: anomaly feed, digest, integrations, operations pulse
//! and the mock chat reply

use serde::{Deserialize, Serialize};

/// Severity of an anomaly signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mid,
    High,
}

/// Anomaly signal from one of the monitored channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Channel and system ("Canale (GA4)")
    pub kind: String,
    pub message: String,
    pub severity: Severity,
}

/// One line of the daily digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestItem {
    pub text: String,
    pub source: String,
}

/// Connection state of an upstream system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    Ok,
    Setup,
}

impl IntegrationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IntegrationStatus::Ok => "OK",
            IntegrationStatus::Setup => "Setup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub name: String,
    pub status: IntegrationStatus,
}

/// Headline metric of the operations overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpsMetric {
    pub label: String,
    pub value: String,
    pub note: String,
}

/// Crew coverage of a shift
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRow {
    pub crew: String,
    pub requested: u32,
    pub planned: u32,
}

impl StaffRow {
    /// Fewer people planned than requested
    pub fn has_gap(&self) -> bool {
        self.planned < self.requested
    }

    pub fn status_label(&self) -> &'static str {
        if self.has_gap() {
            "Gap"
        } else {
            "OK"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub title: String,
    pub reported: String,
    pub resolution: String,
    pub checklist: Vec<String>,
}

/// Canned answer shown in the chat drawer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub diagnosis: String,
    pub diagnosis_source: String,
    pub causes: String,
    pub causes_sources: Vec<String>,
    pub actions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_gap() {
        let row = StaffRow {
            crew: "Crew Palco".to_string(),
            requested: 8,
            planned: 6,
        };
        assert!(row.has_gap());
        assert_eq!(row.status_label(), "Gap");

        let full = StaffRow {
            planned: 8,
            ..row
        };
        assert!(!full.has_gap());
        assert_eq!(full.status_label(), "OK");
    }
}
