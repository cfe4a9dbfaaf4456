//! Built-in sample tables for the preview
//!
//! Everything the dashboard shows comes from here. Values mirror the
//! figures agreed for the 2025/26 season mock-up.

use crate::models::{
    Anomaly, ChatReply, DigestItem, EventItem, FunnelStep, Genre, Incident, Integration,
    IntegrationStatus, KpiCard, OpsMetric, RevenueSlice, Risk, SalesPoint, Severity, StaffRow,
    Venue,
};
use serde::Serialize;

/// Presale revenue baseline in CHF, scaled by the filter factor
pub const BASE_PRESALE_REVENUE: f64 = 48_200.0;

/// Occupancy shown when no event matches the filters
pub const FALLBACK_OCCUPANCY_PCT: i64 = 72;

/// Critical-event count shown when no event matches the filters
pub const FALLBACK_CRITICAL_EVENTS: usize = 3;

/// All static tables of the preview
#[derive(Debug, Clone, Serialize)]
pub struct SampleData {
    pub kpis: Vec<KpiCard>,
    pub sales: Vec<SalesPoint>,
    pub funnel: Vec<FunnelStep>,
    pub events: Vec<EventItem>,
    pub anomalies: Vec<Anomaly>,
    pub revenue_mix: Vec<RevenueSlice>,
    pub digest: Vec<DigestItem>,
    pub integrations: Vec<Integration>,
    pub ops_overview: Vec<OpsMetric>,
    pub staff: Vec<StaffRow>,
    pub incidents: Vec<Incident>,
    pub chat_reply: ChatReply,
}

impl SampleData {
    /// Tables of the LAC Executive Control Tower preview
    pub fn lac_preview() -> Self {
        Self {
            kpis: base_kpis(),
            sales: sales_series(),
            funnel: funnel(),
            events: top_events(),
            anomalies: anomaly_feed(),
            revenue_mix: revenue_mix(),
            digest: digest(),
            integrations: integrations(),
            ops_overview: ops_overview(),
            staff: staff(),
            incidents: incidents(),
            chat_reply: chat_reply(),
        }
    }
}

impl Default for SampleData {
    fn default() -> Self {
        Self::lac_preview()
    }
}

pub fn base_kpis() -> Vec<KpiCard> {
    vec![
        KpiCard::new("Occupazione serata (Eventim)", "72%", "+6% vs LW", "Eventim Inhouse"),
        KpiCard::new("Ricavi Prevendite oggi", "CHF 48’200", "+12% vs target", "Eventim Inhouse"),
        KpiCard::new("Eventi critici T-7/T-3", "3", "2 a T-7 · 1 a T-3", "Eventim Inhouse"),
        KpiCard::new("Carrelli abbandonati", "62%", "−4 pt vs 7 gg", "GA4 + Ticketing"),
        KpiCard::new("Prezzo medio biglietto", "CHF 58", "+CHF 2 vs media", "Eventim Inhouse"),
        KpiCard::new("Allestimenti on-time (Ops)", "94%", "−1 pt vs LW", "Momentus"),
        KpiCard::new("SLA sponsor (benefit)", "92%", "on-time", "SharePoint"),
        KpiCard::new("NPS post-evento 30 gg", "+57", "+3 pts", "Survey → CM"),
    ]
}

pub fn sales_series() -> Vec<SalesPoint> {
    [
        ("Lun", 420, 38_000),
        ("Mar", 510, 45_200),
        ("Mer", 465, 39_900),
        ("Gio", 610, 51_200),
        ("Ven", 780, 68_400),
        ("Sab", 920, 81_200),
        ("Dom", 690, 60_300),
    ]
    .into_iter()
    .map(|(day, tickets, revenue)| SalesPoint {
        day: day.to_string(),
        tickets,
        revenue,
    })
    .collect()
}

pub fn funnel() -> Vec<FunnelStep> {
    [
        ("Reach (GA4)", 120_000),
        ("Click (Meta/DEM)", 18_300),
        ("A2C (GA4/Magnolia)", 2_900),
        ("Purchase (Eventim)", 1_950),
    ]
    .into_iter()
    .map(|(step, value)| FunnelStep {
        step: step.to_string(),
        value,
    })
    .collect()
}

pub fn top_events() -> Vec<EventItem> {
    let event = |title: &str, date: &str, occupancy, risk, venue, genre| EventItem {
        title: title.to_string(),
        date: date.to_string(),
        occupancy,
        risk,
        venue,
        genre,
    };

    vec![
        event("Opera — Don Giovanni", "Ven 24", 0.82, Risk::Low, Venue::SalaTeatro, Genre::Opera),
        event("Danza — Contemporary Mix", "Sab 25", 0.61, Risk::Mid, Venue::Sala1, Genre::Danza),
        event("Teatro — Classici d’Autunno", "Dom 26", 0.44, Risk::High, Venue::Sala2, Genre::Teatro),
        event("Musica — Quartetto d’Archi", "Lun 27", 0.53, Risk::Mid, Venue::Hall, Genre::Musica),
        event("Family — Favole al LAC", "Mar 28", 0.39, Risk::High, Venue::Agora, Genre::Family),
    ]
}

pub fn anomaly_feed() -> Vec<Anomaly> {
    vec![
        Anomaly {
            kind: "Canale (GA4)".to_string(),
            message: "Calo conversione newsletter per ‘Classici d’Autunno’ (−31% vs 14 gg)"
                .to_string(),
            severity: Severity::High,
        },
        Anomaly {
            kind: "Accessi (Ops)".to_string(),
            message: "Coda foyer segnalata; sentiment −12 in 48 h".to_string(),
            severity: Severity::Mid,
        },
        Anomaly {
            kind: "Staff (Momentus)".to_string(),
            message: "Gap crew palco sabato (−2 tecnici luci)".to_string(),
            severity: Severity::Mid,
        },
    ]
}

pub fn revenue_mix() -> Vec<RevenueSlice> {
    [
        ("Biglietti", 62),
        ("Sponsorship", 21),
        ("Venue Rental", 9),
        ("Merch & Altro", 8),
    ]
    .into_iter()
    .map(|(name, value)| RevenueSlice {
        name: name.to_string(),
        value,
    })
    .collect()
}

pub fn digest() -> Vec<DigestItem> {
    [
        ("Prevendite +12% vs target.", "Eventim"),
        ("Occupazione 72% (Teatro 44% a rischio).", "Eventim"),
        ("Sponsor: 2 benefit in scadenza ≤7g.", "SharePoint"),
    ]
    .into_iter()
    .map(|(text, source)| DigestItem {
        text: text.to_string(),
        source: source.to_string(),
    })
    .collect()
}

pub fn integrations() -> Vec<Integration> {
    [
        ("Eventim Inhouse", IntegrationStatus::Ok),
        ("GA4 (Data API)", IntegrationStatus::Ok),
        ("Meta (Insights)", IntegrationStatus::Ok),
        ("Campaign Monitor", IntegrationStatus::Ok),
        ("Momentus (Ops)", IntegrationStatus::Setup),
        ("Dynamics 365 BC", IntegrationStatus::Setup),
        ("Magnolia (CMS)", IntegrationStatus::Ok),
    ]
    .into_iter()
    .map(|(name, status)| Integration {
        name: name.to_string(),
        status,
    })
    .collect()
}

pub fn ops_overview() -> Vec<OpsMetric> {
    [
        ("Allestimenti on-time", "94%", "−1 pt vs settimana scorsa"),
        ("Straordinari (ore / 7 gg)", "31h", "−12% vs target"),
        ("Ticket tecnici aperti", "5", "2 ad alta priorità"),
    ]
    .into_iter()
    .map(|(label, value, note)| OpsMetric {
        label: label.to_string(),
        value: value.to_string(),
        note: note.to_string(),
    })
    .collect()
}

pub fn staff() -> Vec<StaffRow> {
    vec![
        StaffRow {
            crew: "Crew Palco — Sabato".to_string(),
            requested: 8,
            planned: 6,
        },
        StaffRow {
            crew: "Tecnici Luci — Venerdì".to_string(),
            requested: 4,
            planned: 4,
        },
    ]
}

pub fn incidents() -> Vec<Incident> {
    vec![Incident {
        title: "Accessi foyer — coda prolungata".to_string(),
        reported: "ieri 20:11".to_string(),
        resolution: "23 m".to_string(),
        checklist: vec![
            "aprire varco 2".to_string(),
            "segnaletica mobile".to_string(),
            "push info 60’ prima".to_string(),
        ],
    }]
}

pub fn chat_reply() -> ChatReply {
    ChatReply {
        diagnosis: "‘Teatro — Classici d’Autunno’ sotto soglia a T-3.".to_string(),
        diagnosis_source: "Eventim".to_string(),
        causes: "calo CTR DEM, creatività poco performante.".to_string(),
        causes_sources: vec!["GA4".to_string(), "Campaign Monitor".to_string()],
        actions: vec![
            "Bozza DEM recovery in Campaign Monitor (segmento teatro) (demo)".to_string(),
            "Promo last-minute 48h su Meta Ads (budget micro) (demo)".to_string(),
            "Apri alert Teams al Responsabile Comunicazione (demo)".to_string(),
        ],
    }
}
