//! Detail overlay for the selected book

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use bookconnect_core::view::BookDetail;

use crate::tui::modal::{centered_rect, open_modal};
use crate::tui::theme::Palette;

pub fn render(frame: &mut Frame, detail: &BookDetail, palette: &Palette) {
    let modal_area = centered_rect(70, 60, frame.area());
    let inner = open_modal(frame, modal_area, &detail.title, palette);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Cover
            Constraint::Length(1),
            Constraint::Min(3),    // Description
            Constraint::Length(1), // Help
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(detail.subtitle.as_str(), palette.highlight)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Cover: ", palette.muted),
            Span::styled(detail.image.as_str(), palette.base),
        ])),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(detail.description.as_str())
            .style(palette.base)
            .wrap(Wrap { trim: true }),
        chunks[3],
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("[Esc]", palette.highlight),
        Span::raw(" Close"),
    ]))
    .alignment(Alignment::Center)
    .style(palette.muted);
    frame.render_widget(help, chunks[4]);
}
