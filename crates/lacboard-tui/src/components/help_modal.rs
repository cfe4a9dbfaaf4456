//! Help modal component for displaying keybindings

use super::centered_rect;
use crate::app::Page;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Help modal displaying keybindings
pub struct HelpModal {
    visible: bool,
}

impl Default for HelpModal {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpModal {
    pub fn new() -> Self {
        Self { visible: false }
    }

    /// Toggle help modal visibility
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Check if modal is visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the modal
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Render the help modal as an overlay
    pub fn render(&self, frame: &mut Frame, area: Rect, page: Page) {
        if !self.visible {
            return;
        }

        let modal_area = centered_rect(64, 24, area);

        // Clear the area behind the modal
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                " Help - Keybindings ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let help_text = Paragraph::new(Self::build_help_content(page))
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Left);

        frame.render_widget(help_text, inner);
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn binding(keys: &'static str, description: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {:<12}", keys), Style::default().fg(Color::Cyan)),
            Span::raw(description),
        ])
    }

    /// Build help content based on the active page
    fn build_help_content(page: Page) -> Vec<Line<'static>> {
        let mut lines = vec![
            Self::section("Global:"),
            Line::from(""),
            Self::binding("q / Ctrl+C", "Quit"),
            Self::binding("?", "Toggle this help"),
            Self::binding("i", "Info about this preview"),
            Self::binding("Tab", "Next page"),
            Self::binding("Shift+Tab", "Previous page"),
            Self::binding("1-4", "Jump to page"),
            Self::binding("t", "Toggle light/dark theme"),
            Line::from(""),
            Self::section("Filters:"),
            Line::from(""),
            Self::binding("g / G", "Next / previous genre"),
            Self::binding("v / V", "Next / previous venue"),
            Self::binding("x", "Azzera filtri"),
            Line::from(""),
            Self::section("Chat:"),
            Line::from(""),
            Self::binding("/ or a", "Type a question"),
            Self::binding("Enter", "Send question (opens reply drawer)"),
            Self::binding("Esc", "Close drawer / stop typing"),
        ];

        if page == Page::Operations {
            lines.push(Line::from(""));
            lines.push(Self::section("Operations:"));
            lines.push(Line::from(""));
            lines.push(Self::binding("←/→ h/l", "Switch Overview / Staff / Incident"));
            lines.push(Self::binding("F1-F3", "Select sub-tab directly"));
        }

        lines
    }
}
