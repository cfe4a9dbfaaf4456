//! Brand palette and semantic colors for the lacboard TUI
//!
//! Color language:
//! - Brand ink / grays: text, borders, bars
//! - Green: OK, low risk
//! - Amber: attention, mid risk, setup, OPS flags
//! - Rose: high risk, high severity

use lacboard_core::models::{ColorScheme, IntegrationStatus, Risk, Severity};
use ratatui::style::{Color, Modifier, Style};

/// Brand colors resolved for a color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Main text and filled bars (#231F20 on light)
    pub primary: Color,
    /// Secondary text (#534F50)
    pub gray700: Color,
    /// Muted labels (#8C8A8B)
    pub gray500: Color,
    /// Borders and empty bar tracks (#CBCACA)
    pub gray300: Color,
    /// Page background (#F5F5F5)
    pub bg: Color,
    /// Highlight for focus and selection
    pub accent: Color,
}

impl Palette {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self {
                primary: Color::Rgb(245, 245, 245),
                gray700: Color::Rgb(203, 202, 202),
                gray500: Color::Rgb(140, 138, 139),
                gray300: Color::Rgb(83, 79, 80),
                bg: Color::Reset,
                accent: Color::Cyan,
            },
            ColorScheme::Light => Self {
                primary: Color::Rgb(35, 31, 32),
                gray700: Color::Rgb(83, 79, 80),
                gray500: Color::Rgb(140, 138, 139),
                gray300: Color::Rgb(203, 202, 202),
                bg: Color::Rgb(245, 245, 245),
                accent: Color::Rgb(0, 128, 128),
            },
        }
    }

    /// Card border
    pub fn border(&self) -> Style {
        Style::default().fg(self.gray300)
    }

    /// Card title
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.gray500)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.primary)
    }
}

/// Semantic status colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Success,
    Warning,
    Error,
}

impl StatusColor {
    pub fn to_color(self, scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => match self {
                StatusColor::Success => Color::Green,
                StatusColor::Warning => Color::Yellow,
                StatusColor::Error => Color::LightRed,
            },
            ColorScheme::Light => match self {
                StatusColor::Success => Color::Rgb(4, 120, 87),
                StatusColor::Warning => Color::Rgb(180, 83, 9),
                StatusColor::Error => Color::Rgb(225, 29, 72),
            },
        }
    }

    /// Badge style: colored text, bold
    pub fn badge(self, scheme: ColorScheme) -> Style {
        Style::default()
            .fg(self.to_color(scheme))
            .add_modifier(Modifier::BOLD)
    }
}

impl From<Risk> for StatusColor {
    fn from(risk: Risk) -> Self {
        match risk {
            Risk::Low => StatusColor::Success,
            Risk::Mid => StatusColor::Warning,
            Risk::High => StatusColor::Error,
        }
    }
}

impl From<IntegrationStatus> for StatusColor {
    fn from(status: IntegrationStatus) -> Self {
        match status {
            IntegrationStatus::Ok => StatusColor::Success,
            IntegrationStatus::Setup => StatusColor::Warning,
        }
    }
}

/// Style of an anomaly message: high severity stands out, mid stays plain
pub fn severity_style(severity: Severity, palette: &Palette, scheme: ColorScheme) -> Style {
    match severity {
        Severity::High => Style::default().fg(StatusColor::Error.to_color(scheme)),
        Severity::Mid => palette.text(),
    }
}

/// Heat bucket for a slot intensity in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatLevel {
    Low,
    Medium,
    High,
}

impl HeatLevel {
    pub fn from_intensity(value: f64) -> Self {
        if value >= 0.7 {
            HeatLevel::High
        } else if value >= 0.4 {
            HeatLevel::Medium
        } else {
            HeatLevel::Low
        }
    }

    pub fn to_color(self, palette: &Palette) -> Color {
        match self {
            HeatLevel::High => palette.primary,
            HeatLevel::Medium => palette.gray700,
            HeatLevel::Low => palette.gray500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_level_thresholds() {
        assert_eq!(HeatLevel::from_intensity(0.0), HeatLevel::Low);
        assert_eq!(HeatLevel::from_intensity(0.39), HeatLevel::Low);
        assert_eq!(HeatLevel::from_intensity(0.4), HeatLevel::Medium);
        assert_eq!(HeatLevel::from_intensity(0.7), HeatLevel::High);
        assert_eq!(HeatLevel::from_intensity(1.0), HeatLevel::High);
    }

    #[test]
    fn test_risk_maps_to_status() {
        assert_eq!(StatusColor::from(Risk::Low), StatusColor::Success);
        assert_eq!(StatusColor::from(Risk::High), StatusColor::Error);
        assert_eq!(
            StatusColor::from(IntegrationStatus::Setup),
            StatusColor::Warning
        );
    }

    #[test]
    fn test_light_palette_uses_brand_ink() {
        let palette = Palette::for_scheme(ColorScheme::Light);
        assert_eq!(palette.primary, Color::Rgb(35, 31, 32));
        assert_ne!(palette, Palette::for_scheme(ColorScheme::Dark));
    }
}
