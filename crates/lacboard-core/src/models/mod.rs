//! Data models for the dashboard

pub mod config;
pub mod event;
pub mod heatmap;
pub mod kpi;
pub mod ops;
pub mod sales;

pub use config::ColorScheme;
pub use event::{EventItem, Genre, Risk, Venue};
pub use heatmap::{HeatmapDay, HeatmapSlot, SLOT_LABELS};
pub use kpi::KpiCard;
pub use ops::{
    Anomaly, ChatReply, DigestItem, Incident, Integration, IntegrationStatus, OpsMetric,
    Severity, StaffRow,
};
pub use sales::{revenue_mix_total, FunnelLevel, FunnelStep, RevenueSlice, SalesPoint};
