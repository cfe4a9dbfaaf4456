//! Sales page: 7-day tickets/revenue chart, funnel, revenue mix

use super::card;
use crate::components::source_pill;
use crate::theme::Palette;
use lacboard_core::format::format_thousands;
use lacboard_core::models::{FunnelLevel, RevenueSlice, SalesPoint};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, Gauge, GraphType},
};

/// Revenue is plotted on the tickets axis divided by this
const REVENUE_SCALE: f64 = 100.0;

const FUNNEL_SOURCES: [&str; 3] = ["GA4", "Campaign Monitor", "Eventim"];

pub struct SalesTab;

impl Default for SalesTab {
    fn default() -> Self {
        Self::new()
    }
}

impl SalesTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        sales: &[SalesPoint],
        funnel: &[FunnelLevel],
        mix: &[RevenueSlice],
        palette: &Palette,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        self.render_sales_chart(frame, chunks[0], sales, palette);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(funnel.len() as u16 * 2 + 2),
                Constraint::Min(mix.len() as u16 + 2),
            ])
            .split(chunks[1]);

        self.render_funnel(frame, right[0], funnel, palette);
        self.render_revenue_mix(frame, right[1], mix, palette);
    }

    fn render_sales_chart(&self, frame: &mut Frame, area: Rect, sales: &[SalesPoint], palette: &Palette) {
        let block = card("Vendite & Ricavi (ultimi 7 giorni)", palette)
            .title_top(Line::from(source_pill("Eventim Inhouse", palette)).right_aligned());

        let (tickets, revenue) = chart_series(sales);
        let y_max = tickets
            .iter()
            .chain(revenue.iter())
            .map(|p| p.1)
            .fold(1.0, f64::max);

        let datasets = vec![
            Dataset::default()
                .name("Biglietti")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(palette.primary))
                .data(&tickets),
            Dataset::default()
                .name("Ricavi CHF (x100)")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(palette.accent))
                .data(&revenue),
        ];

        let x_labels: Vec<Span> = sales.iter().map(|p| Span::raw(p.day.clone())).collect();
        let y_labels = vec![
            Span::raw("0"),
            Span::raw(format_thousands((y_max / 2.0).round() as i64)),
            Span::raw(format_thousands(y_max.round() as i64)),
        ];

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .style(palette.muted())
                    .labels(x_labels)
                    .bounds([0.0, sales.len().saturating_sub(1).max(1) as f64]),
            )
            .y_axis(
                Axis::default()
                    .style(palette.muted())
                    .labels(y_labels)
                    .bounds([0.0, y_max * 1.1]),
            );

        frame.render_widget(chart, area);
    }

    fn render_funnel(&self, frame: &mut Frame, area: Rect, funnel: &[FunnelLevel], palette: &Palette) {
        let block = card("Funnel — Top eventi", palette)
            .title_top(source_pills(&FUNNEL_SOURCES, palette).right_aligned());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(funnel.iter().map(|_| Constraint::Length(2)).collect::<Vec<_>>())
            .split(inner);

        for (level, row) in funnel.iter().zip(rows.iter()) {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(palette.primary).bg(palette.gray300))
                .percent(level.pct.min(100) as u16)
                .label(Span::styled(
                    format!("{:<20} {:>8}", level.step, format_thousands(level.value as i64)),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            frame.render_widget(gauge, Rect { height: 1, ..*row });
        }
    }

    fn render_revenue_mix(&self, frame: &mut Frame, area: Rect, mix: &[RevenueSlice], palette: &Palette) {
        let block = card("Mix ricavi (ultimi 30 gg)", palette)
            .title_bottom(Line::from(source_pill("Eventim + Dynamics 365 BC", palette)).right_aligned());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(mix.iter().map(|_| Constraint::Length(1)).collect::<Vec<_>>())
            .split(inner);

        for (slice, row) in mix.iter().zip(rows.iter()) {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(palette.gray700).bg(palette.gray300))
                .percent(slice.value.min(100) as u16)
                .label(format!("{} {}%", slice.name, slice.value));
            frame.render_widget(gauge, *row);
        }
    }
}

fn source_pills(labels: &[&str], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for label in labels {
        spans.push(Span::raw(" "));
        spans.push(source_pill(label, palette));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

/// (tickets, revenue / 100) as chart points indexed by day
fn chart_series(sales: &[SalesPoint]) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    sales
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = i as f64;
            ((x, p.tickets as f64), (x, p.revenue as f64 / REVENUE_SCALE))
        })
        .unzip()
}
