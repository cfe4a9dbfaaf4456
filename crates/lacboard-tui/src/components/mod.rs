pub mod chat_drawer;
pub mod filter_bar;
pub mod help_modal;
pub mod info_tooltip;
pub mod kpi_card;
pub mod pill;

pub use chat_drawer::ChatDrawer;
pub use filter_bar::FilterBar;
pub use help_modal::HelpModal;
pub use info_tooltip::InfoTooltip;
pub use kpi_card::render_kpi_card;
pub use pill::{badge, source_pill};

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Area of `width` x `height` centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(60, 20, area);
        assert_eq!(r, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let r = centered_rect(60, 20, area);
        assert_eq!(r.width, 30);
        assert_eq!(r.height, 10);
    }
}
