//! Genre/venue selectors with active-filter chips

use crate::theme::{Palette, StatusColor};
use lacboard_core::models::ColorScheme;
use lacboard_core::EventFilter;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub const ALL_GENRES: &str = "Tutti";
pub const ALL_VENUES: &str = "Tutte";

/// One-line filter bar
pub struct FilterBar<'a> {
    filter: &'a EventFilter,
}

impl<'a> FilterBar<'a> {
    pub fn new(filter: &'a EventFilter) -> Self {
        Self { filter }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, scheme: ColorScheme) {
        frame.render_widget(Paragraph::new(self.line(palette, scheme)), area);
    }

    fn selector(label: &str, key: char, value: &str, palette: &Palette) -> Vec<Span<'static>> {
        vec![
            Span::styled(format!("{} ", label), palette.muted()),
            Span::styled(
                format!("‹ {} ›", value),
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" [{}]  ", key), palette.muted()),
        ]
    }

    pub fn line(&self, palette: &Palette, scheme: ColorScheme) -> Line<'static> {
        let genre = non_empty_or(&self.filter.genre, ALL_GENRES);
        let venue = non_empty_or(&self.filter.venue, ALL_VENUES);

        let mut spans = Self::selector("Genere", 'g', genre, palette);
        spans.extend(Self::selector("Venue", 'v', venue, palette));

        if self.filter.is_active() {
            for chip in self.filter.describe() {
                spans.push(Span::styled(
                    format!(" {} ", chip),
                    Style::default().fg(palette.bg).bg(palette.gray700),
                ));
                spans.push(Span::raw(" "));
            }
            spans.push(super::badge("FILTRI ATTIVI", StatusColor::Warning, scheme));
            spans.push(Span::styled("  Azzera filtri [x]", palette.muted()));
        }

        Line::from(spans)
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_inactive_filter_shows_defaults() {
        let filter = EventFilter::default();
        let palette = Palette::for_scheme(ColorScheme::Dark);
        let line = text(&FilterBar::new(&filter).line(&palette, ColorScheme::Dark));
        assert!(line.contains("‹ Tutti ›"));
        assert!(line.contains("‹ Tutte ›"));
        assert!(!line.contains("FILTRI ATTIVI"));
    }

    #[test]
    fn test_active_filter_shows_chips_and_badge() {
        let filter = EventFilter::new("Opera", "Hall");
        let palette = Palette::for_scheme(ColorScheme::Light);
        let line = text(&FilterBar::new(&filter).line(&palette, ColorScheme::Light));
        assert!(line.contains("Genere: Opera"));
        assert!(line.contains("Venue: Hall"));
        assert!(line.contains("[FILTRI ATTIVI]"));
        assert!(line.contains("Azzera filtri"));
    }
}
