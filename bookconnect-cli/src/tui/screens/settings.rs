//! Settings overlay: day/night theme select

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use bookconnect_core::theme::ThemeMode;

use crate::tui::modal::{centered_rect, open_modal};
use crate::tui::theme::Palette;

pub fn render(frame: &mut Frame, pending: ThemeMode, palette: &Palette) {
    let modal_area = centered_rect(40, 30, frame.area());
    let inner = open_modal(frame, modal_area, "Settings", palette);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let option = |mode: ThemeMode, label: &'static str| {
        if mode == pending {
            Span::styled(format!("(•) {label}"), palette.highlight)
        } else {
            Span::styled(format!("( ) {label}"), palette.base)
        }
    };

    let theme_line = Line::from(vec![
        Span::styled("Theme:  ", palette.base),
        option(ThemeMode::Day, "Day"),
        Span::raw("   "),
        option(ThemeMode::Night, "Night"),
    ]);
    frame.render_widget(Paragraph::new(theme_line), chunks[0]);

    let help_text = Line::from(vec![
        Span::styled("[←/→]", palette.highlight),
        Span::raw(" Change  "),
        Span::styled("[Enter]", palette.highlight),
        Span::raw(" Save  "),
        Span::styled("[Esc]", palette.highlight),
        Span::raw(" Cancel"),
    ]);
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(palette.muted);
    frame.render_widget(help, chunks[2]);
}
