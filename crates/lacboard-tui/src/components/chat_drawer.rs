//! Right-side drawer with the mock dashboard reply

use crate::theme::{Palette, StatusColor};
use lacboard_core::models::{ChatReply, ColorScheme};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const DRAWER_WIDTH: u16 = 56;

/// Drawer content for one submitted question
pub struct ChatDrawer<'a> {
    question: &'a str,
    reply: &'a ChatReply,
}

impl<'a> ChatDrawer<'a> {
    pub fn new(question: &'a str, reply: &'a ChatReply) -> Self {
        Self { question, reply }
    }

    /// Area covered by the drawer inside `area`
    pub fn area(area: Rect) -> Rect {
        let width = DRAWER_WIDTH.min(area.width);
        Rect::new(area.x + area.width - width, area.y, width, area.height)
    }

    /// Render and return the covered area, so clicks outside can close it
    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, scheme: ColorScheme) -> Rect {
        let drawer_area = Self::area(area);
        frame.render_widget(Clear, drawer_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(Span::styled(" Risposta (mock) ", palette.title()))
            .title_bottom(Span::styled(" Esc chiude ", palette.muted()));

        let paragraph = Paragraph::new(self.lines(palette, scheme))
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, drawer_area);

        drawer_area
    }

    fn lines(&self, palette: &Palette, scheme: ColorScheme) -> Vec<Line<'static>> {
        let bold = palette.title();
        let reply = self.reply;

        let mut causes = vec![
            Span::styled("Cause probabili: ", bold),
            Span::styled(reply.causes.clone(), palette.text()),
            Span::raw(" "),
        ];
        for source in &reply.causes_sources {
            causes.push(super::source_pill(source, palette));
            causes.push(Span::raw(" "));
        }

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Domanda: ", palette.muted()),
                Span::styled(
                    self.question.to_string(),
                    palette.text().add_modifier(Modifier::ITALIC),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Diagnosi: ", bold),
                Span::styled(reply.diagnosis.clone(), palette.text()),
                Span::raw(" "),
                super::source_pill(&reply.diagnosis_source, palette),
            ]),
            Line::from(""),
            Line::from(causes),
            Line::from(""),
            Line::from(Span::styled("Azioni suggerite", bold)),
        ];

        lines.extend(reply.actions.iter().enumerate().map(|(i, action)| {
            Line::from(vec![
                Span::styled(
                    format!("  {}. ", i + 1),
                    StatusColor::Success.badge(scheme),
                ),
                Span::styled(action.clone(), palette.text()),
            ])
        }));

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lacboard_core::sample::chat_reply;

    #[test]
    fn test_drawer_hugs_right_edge() {
        let area = Rect::new(0, 0, 120, 40);
        let drawer = ChatDrawer::area(area);
        assert_eq!(drawer, Rect::new(64, 0, 56, 40));
    }

    #[test]
    fn test_drawer_narrow_terminal() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(ChatDrawer::area(area), area);
    }

    #[test]
    fn test_lines_include_three_actions() {
        let reply = chat_reply();
        let drawer = ChatDrawer::new("eventi a rischio?", &reply);
        let palette = Palette::for_scheme(ColorScheme::Dark);
        let lines = drawer.lines(&palette, ColorScheme::Dark);
        let numbered = lines
            .iter()
            .filter(|l| l.spans.first().is_some_and(|s| s.content.trim_start().starts_with(char::is_numeric)))
            .count();
        assert_eq!(numbered, 3);
    }
}
