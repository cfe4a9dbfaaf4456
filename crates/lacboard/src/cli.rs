//! Non-interactive report commands
//!
//! Each formatter renders a comfy-table (human) or pretty JSON.

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use lacboard_core::format::{format_pct, format_thousands};
use lacboard_core::heatmap::weekday_label;
use lacboard_core::models::{EventItem, FunnelLevel, HeatmapDay, KpiCard};
use lacboard_core::{DashboardSnapshot, SelfCheckReport};
use serde::Serialize;

pub const NO_MATCHING_EVENTS: &str = "Nessun evento corrisponde ai filtri selezionati.";

/// Output format shared by every report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub json: bool,
    pub no_color: bool,
}

impl OutputOptions {
    pub fn from_flags(format: Option<&str>, no_color: bool) -> Self {
        Self {
            json: format == Some("json"),
            no_color,
        }
    }
}

// ============================================================================
// Formatters
// ============================================================================

pub fn format_kpis(kpis: &[KpiCard], opts: OutputOptions) -> String {
    if opts.json {
        return to_json(kpis, "[]");
    }

    let mut table = new_table(&["KPI", "Valore", "Delta", "Fonte"], opts);
    for kpi in kpis {
        table.add_row(Row::from(vec![
            kpi.label.as_str(),
            kpi.value.as_str(),
            kpi.delta.as_str(),
            kpi.source.as_str(),
        ]));
    }
    table.to_string()
}

pub fn format_events(events: &[EventItem], opts: OutputOptions) -> String {
    if opts.json {
        return to_json(events, "[]");
    }

    if events.is_empty() {
        return NO_MATCHING_EVENTS.to_string();
    }

    let mut table = new_table(
        &["Data", "Evento", "Genere", "Venue", "Occupazione", "Rischio"],
        opts,
    );
    for event in events {
        let risk = Cell::new(event.risk.label());
        let risk = if opts.no_color {
            risk
        } else {
            risk.fg(risk_color(event))
        };
        table.add_row(Row::from(vec![
            Cell::new(&event.date),
            Cell::new(&event.title),
            Cell::new(event.genre),
            Cell::new(event.venue),
            Cell::new(format!("{}%", event.occupancy_pct())),
            risk,
        ]));
    }
    table.to_string()
}

pub fn format_funnel(funnel: &[FunnelLevel], opts: OutputOptions) -> String {
    if opts.json {
        return to_json(funnel, "[]");
    }

    let mut table = new_table(&["Step", "Valore", "%"], opts);
    for level in funnel {
        table.add_row(Row::from(vec![
            level.step.clone(),
            format_thousands(level.value as i64),
            format!("{}%", level.pct),
        ]));
    }
    table.to_string()
}

pub fn format_heatmap(days: &[HeatmapDay], opts: OutputOptions) -> String {
    if opts.json {
        return to_json(days, "[]");
    }

    let mut table = new_table(&["Giorno", "Data", "Matt", "Pome", "Sera", "OPS"], opts);
    for day in days {
        let mut cells = vec![
            format!("{} {}", day.day, weekday_label(day.date)),
            day.date.format("%Y-%m-%d").to_string(),
        ];
        cells.extend(day.slots.iter().map(|slot| {
            let marker = if slot.ops { " *" } else { "" };
            format!("{}{}", format_pct(slot.value), marker)
        }));
        cells.push(day.ops_count().to_string());
        table.add_row(Row::from(cells));
    }
    format!("{}\n* = segnalazione OPS", table)
}

pub fn format_check(report: &SelfCheckReport, opts: OutputOptions) -> String {
    if opts.json {
        return to_json(report, "{}");
    }

    let mut table = new_table(&["Controllo", "Esito", "Dettaglio"], opts);
    for outcome in &report.outcomes {
        let (label, color) = if outcome.passed {
            ("OK", Color::Green)
        } else {
            ("FAIL", Color::Red)
        };
        let status = if opts.no_color {
            Cell::new(label)
        } else {
            Cell::new(label).fg(color)
        };
        table.add_row(Row::from(vec![
            Cell::new(&outcome.name),
            status,
            Cell::new(outcome.detail.as_deref().unwrap_or("-")),
        ]));
    }

    let (passed, failed) = report.counts();
    format!("{}\n{} passed, {} failed", table, passed, failed)
}

/// Whole derived view; always JSON
pub fn format_snapshot(snapshot: &DashboardSnapshot<'_>) -> String {
    to_json(snapshot, "{}")
}

// ============================================================================
// Utilities
// ============================================================================

fn new_table(headers: &[&str], opts: OutputOptions) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Apply colors only if enabled
    if opts.no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }
    table
}

fn risk_color(event: &EventItem) -> Color {
    use lacboard_core::models::Risk;
    match event.risk {
        Risk::Low => Color::Green,
        Risk::Mid => Color::Yellow,
        Risk::High => Color::Red,
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string())
}

// ============================================================================
// Tests
// ============================================================================
