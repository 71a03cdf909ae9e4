use ratatui::style::{Color, Modifier, Style};

use bookconnect_core::theme::{Rgb, ThemeMode};

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Styles derived from the active day/night theme
///
/// `--color-dark` becomes the foreground and `--color-light` the
/// background, so switching modes inverts the screen.
#[derive(Debug, Clone)]
pub struct Palette {
    pub base: Style,
    pub card: Style,
    pub focused: Style,
    pub muted: Style,
    pub highlight: Style,
    pub disabled: Style,
    pub error: Style,
    pub modal_border: Style,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let vars = mode.variables();
        let fg = color(vars.color_dark);
        let bg = color(vars.color_light);

        Self {
            base: Style::default().fg(fg).bg(bg),
            card: Style::default().fg(fg).bg(bg),
            focused: Style::default()
                .fg(bg)
                .bg(fg)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray).bg(bg),
            highlight: Style::default()
                .fg(Color::Cyan)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .bg(bg)
                .add_modifier(Modifier::DIM),
            error: Style::default()
                .fg(Color::Red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
            modal_border: Style::default()
                .fg(fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        }
    }
}
