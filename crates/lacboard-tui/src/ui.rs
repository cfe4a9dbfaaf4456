//! TUI rendering logic

use crate::app::{App, InputMode, Page};
use crate::components::{ChatDrawer, FilterBar};
use crate::tabs::{EventsTab, OperationsTab, OpsContext, OverviewTab, SalesTab};
use crate::theme::{Palette, StatusColor};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

pub const TITLE: &str = "Executive Control Tower — Stagione Arti Performative 2025/26";
pub const PREVIEW_BADGE: &str = "ANTEPRIMA NON FUNZIONANTE";
pub const FOOTER_NOTE: &str = "Anteprima statica con logo ufficiale, filtri genere/venue e fonti dati per sezione. In produzione: binding ai dataset reali.";

/// Main UI renderer
pub struct Ui {
    overview: OverviewTab,
    events: EventsTab,
    sales: SalesTab,
    operations: OperationsTab,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self {
            overview: OverviewTab::new(),
            events: EventsTab::new(),
            sales: SalesTab::new(),
            operations: OperationsTab::new(),
        }
    }

    /// Render the full UI
    pub fn render(&mut self, frame: &mut Frame, app: &mut App) {
        let size = frame.area();
        let palette = Palette::for_scheme(app.color_scheme);

        frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), size);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Brand row + page tabs + filter bar + border
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Footer note
                Constraint::Length(1), // Status bar
            ])
            .split(size);

        self.render_header(frame, chunks[0], app, &palette);
        self.render_page(frame, chunks[1], app, &palette);

        let footer = Paragraph::new(Span::styled(FOOTER_NOTE, palette.muted()))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);

        self.render_status_bar(frame, chunks[3], app, &palette);

        // Overlays, bottom to top
        app.info_tooltip.render(frame, chunks[1], &palette);
        app.help_modal.render(frame, size, app.page);

        if app.drawer.is_open() {
            let question = app.submitted_query.as_deref().unwrap_or_default();
            let reply = &app.dashboard.data().chat_reply;
            let area = ChatDrawer::new(question, reply).render(frame, size, &palette, app.color_scheme);
            app.drawer_area = Some(area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Brand + title + badge
                Constraint::Length(1), // Pages
                Constraint::Length(1), // Filters
            ])
            .split(inner);

        let brand = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(30), // Logo
                Constraint::Min(0),     // Title
                Constraint::Length(PREVIEW_BADGE.len() as u16 + 10),
            ])
            .split(rows[0]);

        let logo = Paragraph::new(Line::from(vec![
            Span::styled("◈ ", Style::default().fg(palette.accent)),
            Span::styled("LAC ", palette.title()),
            Span::styled("Lugano Arte e Cultura", palette.muted()),
        ]));
        frame.render_widget(logo, brand[0]);

        frame.render_widget(Paragraph::new(Span::styled(TITLE, palette.title())), brand[1]);

        let badge = Paragraph::new(Line::from(vec![
            Span::styled(
                PREVIEW_BADGE,
                StatusColor::Warning
                    .badge(app.color_scheme)
                    .add_modifier(Modifier::REVERSED),
            ),
            Span::styled("  i info", palette.muted()),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(badge, brand[2]);

        let titles: Vec<Line> = Page::all()
            .iter()
            .map(|p| Line::from(format!(" {} {} {} ", p.icon(), p.shortcut(), p.name())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(app.page.index())
            .style(palette.muted())
            .highlight_style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider(Span::styled("│", palette.border()));
        frame.render_widget(tabs, rows[1]);

        FilterBar::new(app.dashboard.filter()).render(frame, rows[2], palette, app.color_scheme);
    }

    fn render_page(&self, frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
        let scheme = app.color_scheme;
        let view = app.dashboard.view();
        let data = app.dashboard.data();

        match app.page {
            Page::Overview => self.overview.render(frame, area, view, data, palette, scheme),
            Page::Events => self.events.render(frame, area, view, palette, scheme),
            Page::Sales => self.sales.render(
                frame,
                area,
                &data.sales,
                app.dashboard.funnel(),
                &data.revenue_mix,
                palette,
            ),
            Page::Operations => {
                let ctx = OpsContext {
                    tab: app.ops_tab,
                    query: &app.query,
                    input_mode: app.input_mode,
                };
                self.operations.render(frame, area, data, &ctx, palette, scheme)
            }
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
        let status = if let Some(ref msg) = app.status_message {
            Line::from(vec![
                Span::styled(" ⚠ ", StatusColor::Warning.badge(app.color_scheme)),
                Span::styled(msg.as_str(), Style::default().fg(StatusColor::Warning.to_color(app.color_scheme))),
            ])
        } else {
            let hint = if app.input_mode == InputMode::Query {
                "typing │ Enter send │ Esc cancel"
            } else {
                match app.page {
                    Page::Operations => "←→/F1-F3 sub-tab │ / ask │ g/v filter │ x reset",
                    _ => "g/v filter │ x reset │ / ask │ t theme │ ? help",
                }
            };
            let matching = app.dashboard.view().events.len();

            Line::from(vec![
                Span::styled(format!(" ● {} eventi ", matching), palette.muted()),
                Span::styled("│", palette.muted()),
                Span::styled(" q", palette.title()),
                Span::styled(" quit ", palette.muted()),
                Span::styled("│", palette.muted()),
                Span::styled(format!(" {}", hint), palette.muted()),
            ])
        };

        let bar = Paragraph::new(status).style(Style::default().bg(palette.gray300));
        frame.render_widget(bar, area);
    }
}
