//! lacboard-core - Core library for lacboard
//!
//! Sample tables, the genre/venue filter, funnel normalization, KPI
//! recomputation, the seeded heatmap and the dashboard state that ties them
//! together.

pub mod dashboard;
pub mod error;
pub mod filter;
pub mod format;
pub mod funnel;
pub mod heatmap;
pub mod kpi;
pub mod models;
pub mod preferences;
pub mod sample;
pub mod self_check;

pub use dashboard::{DashboardConfig, DashboardSnapshot, DashboardState, DashboardView};
pub use error::CoreError;
pub use filter::{filter_events, EventFilter};
pub use format::{format_chf, format_thousands};
pub use funnel::normalize_funnel;
pub use heatmap::{generate_heatmap, scale_heatmap};
pub use kpi::compute_kpis;
pub use preferences::Preferences;
pub use sample::SampleData;
pub use self_check::{run_self_check, SelfCheckReport};
