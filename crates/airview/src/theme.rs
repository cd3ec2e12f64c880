//! Terminal styling: maps chart palette colors onto ratatui styles.

use ratatui::style::{Color, Modifier, Style};

use airview_core::palette;

/// Scene color → terminal RGB color.
pub fn color(c: airview_core::Color) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Panel/block titles.
pub fn title_style() -> Style {
    Style::default()
        .fg(color(palette::MARKER))
        .add_modifier(Modifier::BOLD)
}

pub fn border_style() -> Style {
    Style::default().fg(color(palette::GRID))
}

/// Ordinary label text.
pub fn text_style() -> Style {
    Style::default().fg(color(palette::TEXT))
}

/// Dimmed chrome (gridlines, hints, empty slots).
pub fn dim_style() -> Style {
    Style::default().fg(color(palette::GRID))
}

/// Non-overlapping channel marker and highlighted axis labels.
pub fn marker_style() -> Style {
    Style::default()
        .fg(color(palette::MARKER))
        .add_modifier(Modifier::BOLD)
}

/// Key hint text (e.g. "b band  q quit").
pub fn key_hint_style() -> Style {
    Style::default().fg(color(palette::GRID))
}
