//! Events page: 14-day heatmap and top events

use super::card;
use crate::components::badge;
use crate::empty_state::no_matching_events;
use crate::theme::{HeatLevel, Palette, StatusColor};
use lacboard_core::heatmap::weekday_label;
use lacboard_core::models::{ColorScheme, EventItem, HeatmapDay, HeatmapSlot};
use lacboard_core::DashboardView;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const DAYS_PER_ROW: usize = 7;
/// Day header + three slots + borders
const DAY_CELL_HEIGHT: u16 = 6;

pub struct EventsTab;

impl Default for EventsTab {
    fn default() -> Self {
        Self::new()
    }
}

impl EventsTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &DashboardView,
        palette: &Palette,
        scheme: ColorScheme,
    ) {
        let rows = view.heatmap.len().div_ceil(DAYS_PER_ROW) as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(rows * DAY_CELL_HEIGHT + 3), // cells + legend + border
                Constraint::Min(5),
            ])
            .split(area);

        self.render_heatmap(frame, chunks[0], &view.heatmap, palette, scheme);
        self.render_top_events(frame, chunks[1], &view.events, palette, scheme);
    }

    fn render_heatmap(
        &self,
        frame: &mut Frame,
        area: Rect,
        days: &[HeatmapDay],
        palette: &Palette,
        scheme: ColorScheme,
    ) {
        let block = card("Heatmap prossimi 14 giorni", palette)
            .title_top(heatmap_actions(palette).right_aligned());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let week_rows: Vec<&[HeatmapDay]> = days.chunks(DAYS_PER_ROW).collect();
        let mut constraints: Vec<Constraint> = week_rows
            .iter()
            .map(|_| Constraint::Length(DAY_CELL_HEIGHT))
            .collect();
        constraints.push(Constraint::Length(1)); // legend

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (week, row) in week_rows.iter().zip(rows.iter()) {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, DAYS_PER_ROW as u32); DAYS_PER_ROW])
                .split(*row);
            for (day, cell) in week.iter().zip(cells.iter()) {
                self.render_day(frame, *cell, day, palette, scheme);
            }
        }

        if let Some(legend_area) = rows.last() {
            frame.render_widget(Paragraph::new(legend(palette, scheme)), *legend_area);
        }
    }

    fn render_day(
        &self,
        frame: &mut Frame,
        area: Rect,
        day: &HeatmapDay,
        palette: &Palette,
        scheme: ColorScheme,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border())
            .title(Span::styled(
                format!("{} {}", weekday_label(day.date), day.date.format("%d")),
                palette.muted(),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = day
            .slots
            .iter()
            .map(|slot| slot_line(slot, inner.width, palette, scheme))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_top_events(
        &self,
        frame: &mut Frame,
        area: Rect,
        events: &[EventItem],
        palette: &Palette,
        scheme: ColorScheme,
    ) {
        let block = card("Top 5 eventi imminenti", palette);

        if events.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(no_matching_events(palette), inner);
            return;
        }

        let items: Vec<ListItem> = events
            .iter()
            .map(|e| ListItem::new(event_line(e, palette, scheme)))
            .collect();
        frame.render_widget(List::new(items).block(block), area);
    }
}

/// `Matt ████░░ OPS`: label, intensity bar, ops badge
fn slot_line(slot: &HeatmapSlot, width: u16, palette: &Palette, scheme: ColorScheme) -> Line<'static> {
    const LABEL_WIDTH: u16 = 5;
    const OPS_WIDTH: u16 = 4;

    let bar_width = width.saturating_sub(LABEL_WIDTH + OPS_WIDTH) as usize;
    let filled = ((slot.value * bar_width as f64).round() as usize).min(bar_width);
    let color = HeatLevel::from_intensity(slot.value).to_color(palette);

    let mut spans = vec![
        Span::styled(format!("{:<5}", slot.label), palette.muted()),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(bar_width - filled), Style::default().fg(palette.gray300)),
    ];
    if slot.ops {
        spans.push(Span::styled(" OPS", StatusColor::Warning.badge(scheme)));
    }
    Line::from(spans)
}

fn event_line(event: &EventItem, palette: &Palette, scheme: ColorScheme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<7}", event.date), palette.muted()),
        Span::styled(format!("{:<30}", event.title), palette.title()),
        Span::styled(
            format!("Genere: {} · Venue: {:<12}", event.genre, event.venue),
            palette.muted(),
        ),
        Span::styled(format!("{:>4}%  ", event.occupancy_pct()), palette.text()),
        badge(event.risk.label(), StatusColor::from(event.risk), scheme),
        Span::styled("  [Alert Teams (demo)] [Bozza DEM CM (demo)]", disabled(palette)),
    ])
}

/// Filter keys and the calendar link, shown in the heatmap title
fn heatmap_actions(palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(" [Filtri g/v] ", palette.text()),
        Span::styled("[Calendario LAC] ", disabled(palette)),
    ])
}

/// Actions the preview shows but does not perform
fn disabled(palette: &Palette) -> Style {
    palette.muted().add_modifier(Modifier::DIM)
}

fn legend(palette: &Palette, scheme: ColorScheme) -> Line<'static> {
    let swatch = |level: HeatLevel| Span::styled("██", Style::default().fg(level.to_color(palette)));
    Line::from(vec![
        Span::styled("Intensità: ", palette.muted()),
        swatch(HeatLevel::Low),
        Span::styled(" bassa  ", palette.muted()),
        swatch(HeatLevel::Medium),
        Span::styled(" media  ", palette.muted()),
        swatch(HeatLevel::High),
        Span::styled(" alta   ", palette.muted()),
        Span::styled("OPS", StatusColor::Warning.badge(scheme)),
        Span::styled(
            " indica criticità Momentus (staff/allestimenti) o meteo critico.",
            palette.muted(),
        ),
    ])
}
