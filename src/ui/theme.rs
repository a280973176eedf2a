use crate::assessment::MaturityBand;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_BLUE: Color = Color::Rgb(31, 119, 180);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 190);
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const BG_ELEVATED: Color = Color::Rgb(40, 44, 52);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn metric_value() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_active() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_normal() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn info() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn band(band: MaturityBand) -> Style {
        let color = match band {
            MaturityBand::Minimal => Color::Red,
            MaturityBand::Partial => Color::Yellow,
            MaturityBand::Good => Color::LightGreen,
            MaturityBand::Excellent => Color::Green,
        };
        Style::default().fg(color)
    }
}
