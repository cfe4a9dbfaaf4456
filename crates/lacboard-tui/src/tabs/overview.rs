//! Overview page: KPI grid, digest, anomaly feed, integrations

use super::card;
use crate::components::{badge, render_kpi_card, source_pill};
use crate::theme::{severity_style, Palette, StatusColor};
use lacboard_core::models::{Anomaly, ColorScheme, DigestItem, Integration, KpiCard};
use lacboard_core::{DashboardView, SampleData};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

const CARDS_PER_ROW: usize = 4;

pub struct OverviewTab;

impl Default for OverviewTab {
    fn default() -> Self {
        Self::new()
    }
}

impl OverviewTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &DashboardView,
        data: &SampleData,
        palette: &Palette,
        scheme: ColorScheme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // KPI row 1
                Constraint::Length(5), // KPI row 2
                Constraint::Min(6),    // Digest / anomalies / integrations
            ])
            .split(area);

        for (row, cards) in view.kpis.chunks(CARDS_PER_ROW).take(2).enumerate() {
            self.render_kpi_row(frame, chunks[row], cards, palette);
        }

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(35),
                Constraint::Percentage(25),
            ])
            .split(chunks[2]);

        self.render_digest(frame, bottom[0], &data.digest, palette);
        self.render_anomalies(frame, bottom[1], &data.anomalies, palette, scheme);
        self.render_integrations(frame, bottom[2], &data.integrations, palette, scheme);
    }

    fn render_kpi_row(&self, frame: &mut Frame, area: Rect, cards: &[KpiCard], palette: &Palette) {
        let constraints = vec![Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW];
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (kpi, column) in cards.iter().zip(columns.iter()) {
            render_kpi_card(frame, *column, kpi, palette);
        }
    }

    fn render_digest(&self, frame: &mut Frame, area: Rect, digest: &[DigestItem], palette: &Palette) {
        let lines: Vec<Line> = digest
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled("• ", palette.muted()),
                    Span::styled(item.text.clone(), palette.text()),
                    Span::raw(" "),
                    source_pill(&item.source, palette),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                card("3 cose da sapere oggi (Digest AI)", palette)
                    .title_top(Line::from(source_pill("SharePoint + Teams (Graph)", palette)).right_aligned()),
            );
        frame.render_widget(paragraph, area);
    }

    fn render_anomalies(
        &self,
        frame: &mut Frame,
        area: Rect,
        anomalies: &[Anomaly],
        palette: &Palette,
        scheme: ColorScheme,
    ) {
        let items: Vec<ListItem> = anomalies
            .iter()
            .map(|a| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}  ", a.kind), palette.muted()),
                    Span::styled(a.message.clone(), severity_style(a.severity, palette, scheme)),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(card("Segnali di anomalia", palette)), area);
    }

    fn render_integrations(
        &self,
        frame: &mut Frame,
        area: Rect,
        integrations: &[Integration],
        palette: &Palette,
        scheme: ColorScheme,
    ) {
        let mut items: Vec<ListItem> = integrations
            .iter()
            .map(|i| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<18}", i.name), palette.text()),
                    badge(i.status.label(), StatusColor::from(i.status), scheme),
                ]))
            })
            .collect();
        items.push(ListItem::new(Line::from(Span::styled(
            "OAuth / SFTP / IP allowlist previsti in produzione.",
            palette.muted(),
        ))));

        frame.render_widget(
            List::new(items).block(card("Stato integrazioni (mock)", palette)),
            area,
        );
    }
}
