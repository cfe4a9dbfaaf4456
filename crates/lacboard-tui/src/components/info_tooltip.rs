//! Info tooltip anchored under the header

use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub const INFO_TEXT: &str = "Mock interattivo con fonti dati mappate e filtri Genere/Venue.";

/// Small popup explaining the preview
pub struct InfoTooltip {
    visible: bool,
}

impl Default for InfoTooltip {
    fn default() -> Self {
        Self::new()
    }
}

impl InfoTooltip {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Render at the top-right corner of `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        if !self.visible {
            return;
        }

        let width = (INFO_TEXT.chars().count() as u16 + 4).min(area.width);
        let height = 3.min(area.height);
        let tooltip_area = Rect::new(
            area.x + area.width.saturating_sub(width),
            area.y,
            width,
            height,
        );

        frame.render_widget(Clear, tooltip_area);
        let tooltip = Paragraph::new(Line::from(Span::styled(INFO_TEXT, palette.text())))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.border()),
            );
        frame.render_widget(tooltip, tooltip_area);
    }
}
