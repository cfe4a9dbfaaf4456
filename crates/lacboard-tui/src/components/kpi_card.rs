//! KPI card: label title, large value, delta and source

use crate::theme::Palette;
use lacboard_core::models::KpiCard;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_kpi_card(frame: &mut Frame, area: Rect, card: &KpiCard, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border())
        .title(Span::styled(format!(" {} ", card.label), palette.muted()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // value
            Constraint::Length(1), // delta
            Constraint::Length(1), // source
            Constraint::Min(0),
        ])
        .split(inner);

    let value = Paragraph::new(Line::from(Span::styled(
        card.value.clone(),
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(value, inner_chunks[0]);

    let delta = Paragraph::new(Line::from(Span::styled(card.delta.clone(), palette.muted())))
        .alignment(Alignment::Center);
    frame.render_widget(delta, inner_chunks[1]);

    let source = Paragraph::new(Line::from(super::source_pill(&card.source, palette)))
        .alignment(Alignment::Center);
    frame.render_widget(source, inner_chunks[2]);
}
