//! Operations page: Operations Pulse sub-tabs and the "ask the dashboard" card

use super::card;
use crate::app::{InputMode, OpsTab};
use crate::components::badge;
use crate::theme::{Palette, StatusColor};
use lacboard_core::models::{ColorScheme, Incident, OpsMetric, StaffRow};
use lacboard_core::SampleData;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

pub const QUERY_PLACEHOLDER: &str =
    "Es. Mostrami gli eventi a rischio e proponi azioni (CM/Meta/Teams)";

/// What the ops card and chat card need from the app
pub struct OpsContext<'a> {
    pub tab: OpsTab,
    pub query: &'a str,
    pub input_mode: InputMode,
}

pub struct OperationsTab;

impl Default for OperationsTab {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationsTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &SampleData,
        ctx: &OpsContext,
        palette: &Palette,
        scheme: ColorScheme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        self.render_pulse(frame, chunks[0], data, ctx.tab, palette, scheme);
        self.render_chat(frame, chunks[1], ctx, palette);
    }

    fn render_pulse(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &SampleData,
        tab: OpsTab,
        palette: &Palette,
        scheme: ColorScheme,
    ) {
        let block = card("Operations Pulse (Momentus)", palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let titles: Vec<Line> = OpsTab::all()
            .iter()
            .enumerate()
            .map(|(i, t)| Line::from(format!(" F{} {} ", i + 1, t.name())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(tab.index())
            .style(palette.muted())
            .highlight_style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider(Span::styled("│", palette.border()));
        frame.render_widget(tabs, chunks[0]);

        match tab {
            OpsTab::Overview => self.render_metrics(frame, chunks[1], &data.ops_overview, palette),
            OpsTab::Staff => {
                let lines: Vec<Line> = data
                    .staff
                    .iter()
                    .flat_map(|row| staff_lines(row, palette, scheme))
                    .collect();
                frame.render_widget(Paragraph::new(lines), chunks[1]);
            }
            OpsTab::Incident => {
                let lines: Vec<Line> = data
                    .incidents
                    .iter()
                    .flat_map(|incident| incident_lines(incident, palette, scheme))
                    .collect();
                frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);
            }
        }
    }

    fn render_metrics(&self, frame: &mut Frame, area: Rect, metrics: &[OpsMetric], palette: &Palette) {
        if metrics.is_empty() {
            return;
        }
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, metrics.len() as u32); metrics.len()])
            .split(area);

        for (metric, column) in metrics.iter().zip(columns.iter()) {
            let lines = vec![
                Line::from(Span::styled(metric.label.clone(), palette.muted())),
                Line::from(Span::styled(
                    metric.value.clone(),
                    Style::default()
                        .fg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(metric.note.clone(), palette.muted())),
            ];
            let tile = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(palette.border()),
                );
            frame.render_widget(tile, Rect { height: column.height.min(5), ..*column });
        }
    }

    fn render_chat(&self, frame: &mut Frame, area: Rect, ctx: &OpsContext, palette: &Palette) {
        let block = card("Chiedi alla dashboard", palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // input
                Constraint::Length(1), // submit hint
                Constraint::Min(0),    // production note
            ])
            .split(inner);

        let editing = ctx.input_mode == InputMode::Query;
        let input_line = if ctx.query.is_empty() && !editing {
            Line::from(Span::styled(
                QUERY_PLACEHOLDER,
                palette.muted().add_modifier(Modifier::ITALIC),
            ))
        } else {
            let mut spans = vec![Span::styled(ctx.query.to_string(), palette.text())];
            if editing {
                spans.push(Span::styled("▏", Style::default().fg(palette.accent)));
            }
            Line::from(spans)
        };

        let border = if editing {
            Style::default().fg(palette.accent)
        } else {
            palette.border()
        };
        let input = Paragraph::new(input_line)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(input, chunks[0]);

        let hint = if editing {
            "Enter invia domanda (demo) · Esc annulla"
        } else {
            "/ scrivi una domanda"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, palette.muted())),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                "In produzione: RAG su SharePoint/Teams + query su DB/GA4; azioni Make/n8n.",
                palette.muted(),
            ))
            .wrap(Wrap { trim: true }),
            chunks[2],
        );
    }
}

/// Crew name with Gap/OK badge, then the requested vs planned counts
fn staff_lines(row: &StaffRow, palette: &Palette, scheme: ColorScheme) -> Vec<Line<'static>> {
    let status = if row.has_gap() {
        StatusColor::Warning
    } else {
        StatusColor::Success
    };
    vec![
        Line::from(vec![
            Span::styled(format!("{}  ", row.crew), palette.title()),
            badge(row.status_label(), status, scheme),
        ]),
        Line::from(Span::styled(
            format!("Richieste {} · Pianificate {}", row.requested, row.planned),
            palette.muted(),
        )),
        Line::from(""),
    ]
}

fn incident_lines(incident: &Incident, palette: &Palette, scheme: ColorScheme) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("▲ ", StatusColor::Error.badge(scheme)),
            Span::styled(incident.title.clone(), palette.title()),
        ]),
        Line::from(Span::styled(
            format!(
                "Segnalato: {} · Tempo risoluzione: {}",
                incident.reported, incident.resolution
            ),
            palette.muted(),
        )),
        Line::from(Span::styled(
            format!("Check-list: {}", incident.checklist.join(" · ")),
            palette.text(),
        )),
        Line::from(""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use lacboard_core::sample::{incidents, staff};

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_staff_gap_and_ok() {
        let palette = Palette::for_scheme(ColorScheme::Dark);
        let rows = staff();
        let gap = text(&staff_lines(&rows[0], &palette, ColorScheme::Dark));
        assert_eq!(gap[0], "Crew Palco — Sabato  [Gap]");
        assert_eq!(gap[1], "Richieste 8 · Pianificate 6");
        let ok = text(&staff_lines(&rows[1], &palette, ColorScheme::Dark));
        assert!(ok[0].ends_with("[OK]"));
    }

    #[test]
    fn test_incident_checklist_joined() {
        let palette = Palette::for_scheme(ColorScheme::Dark);
        let lines = text(&incident_lines(&incidents()[0], &palette, ColorScheme::Dark));
        assert_eq!(
            lines[2],
            "Check-list: aprire varco 2 · segnaletica mobile · push info 60’ prima"
        );
        assert!(lines[1].contains("23 m"));
    }
}
