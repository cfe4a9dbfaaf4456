//! Inline labels: data-source pills and status badges

use crate::theme::{Palette, StatusColor};
use lacboard_core::models::ColorScheme;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Data source attribution, rendered as `(Eventim)`
pub fn source_pill(label: &str, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!("({})", label),
        Style::default()
            .fg(palette.gray700)
            .add_modifier(Modifier::ITALIC),
    )
}

/// Bracketed status badge, rendered as `[OK]`
pub fn badge(label: &str, status: StatusColor, scheme: ColorScheme) -> Span<'static> {
    Span::styled(format!("[{}]", label), status.badge(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_and_badge_content() {
        let palette = Palette::for_scheme(ColorScheme::Dark);
        assert_eq!(source_pill("GA4", &palette).content, "(GA4)");
        assert_eq!(
            badge("Setup", StatusColor::Warning, ColorScheme::Dark).content,
            "[Setup]"
        );
    }
}
