//! Dashboard pages

pub mod events;
pub mod operations;
pub mod overview;
pub mod sales;

pub use events::EventsTab;
pub use operations::{OperationsTab, OpsContext};
pub use overview::OverviewTab;
pub use sales::SalesTab;

use crate::theme::Palette;
use ratatui::{
    text::Span,
    widgets::{Block, Borders},
};

/// Bordered card with a bold title, shared by every page
pub(crate) fn card(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border())
        .title(Span::styled(format!(" {} ", title), palette.title()))
}
