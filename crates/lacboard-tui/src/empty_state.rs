//! Empty state messages with actionable hints

use crate::theme::Palette;
use ratatui::{
    layout::Alignment,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Builder for empty state messages
pub struct EmptyState {
    title: String,
    message: Vec<String>,
    actions: Vec<(String, String)>, // (key, description)
}

impl EmptyState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a message line
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message.push(msg.into());
        self
    }

    /// Add an action hint
    pub fn action(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.actions.push((key.into(), description.into()));
        self
    }

    /// Build the paragraph widget
    pub fn build(self, palette: &Palette) -> Paragraph<'static> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(self.title, palette.title())),
        ];

        if !self.message.is_empty() {
            lines.push(Line::from(""));
            for msg in self.message {
                lines.push(Line::from(Span::styled(msg, palette.muted())));
            }
        }

        if !self.actions.is_empty() {
            lines.push(Line::from(""));
            for (key, desc) in self.actions {
                lines.push(Line::from(vec![
                    Span::styled("[", palette.muted()),
                    Span::styled(key, palette.text().add_modifier(Modifier::BOLD)),
                    Span::styled("] ", palette.muted()),
                    Span::styled(desc, palette.text()),
                ]));
            }
        }

        Paragraph::new(lines).alignment(Alignment::Center)
    }
}

/// Shown when the genre/venue filter leaves no events
pub fn no_matching_events(palette: &Palette) -> Paragraph<'static> {
    EmptyState::new("Nessun evento corrisponde ai filtri selezionati.")
        .action("x", "Azzera filtri")
        .build(palette)
}
