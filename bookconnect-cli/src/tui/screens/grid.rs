//! Preview grid: header, cards, "show more" button

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::commands::NO_RESULTS_MESSAGE;
use crate::tui::state::BrowserState;
use crate::tui::theme::Palette;

/// Width of a card including its border
pub const CARD_WIDTH: u16 = 32;

/// Height of a card including its border
pub const CARD_HEIGHT: u16 = 4;

/// Cards that fit side by side in `width` columns
pub fn columns_for(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

pub fn render(frame: &mut Frame, state: &mut BrowserState, palette: &Palette) {
    frame.render_widget(Block::default().style(palette.base), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(3), // Show more
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state, palette);
    render_cards(frame, chunks[1], state, palette);
    render_show_more(frame, chunks[2], state, palette);
    render_help(frame, chunks[3], palette);
}

fn render_header(frame: &mut Frame, area: Rect, state: &BrowserState, palette: &Palette) {
    let store = &state.store;
    let mut spans = vec![
        Span::styled(" BookConnect ", palette.highlight),
        Span::styled(
            format!(
                " {} of {} shown",
                state.cards.len(),
                store.result_len()
            ),
            palette.base,
        ),
    ];

    if !store.current_filter().is_identity() {
        spans.push(Span::styled("  (filtered)", palette.muted));
    }
    if let Some(status) = &state.status {
        spans.push(Span::styled(format!("  {status}"), palette.error));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .style(palette.base)
            .title(format!(" theme: {} ", state.theme)),
    );
    frame.render_widget(header, area);
}

fn render_cards(frame: &mut Frame, area: Rect, state: &mut BrowserState, palette: &Palette) {
    if state.show_no_results {
        let message = Paragraph::new(NO_RESULTS_MESSAGE)
            .alignment(Alignment::Center)
            .style(palette.muted)
            .block(Block::default().style(palette.base));
        frame.render_widget(message, area);
        return;
    }

    let columns = columns_for(area.width);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    state.set_viewport(columns, visible_rows);

    let first = state.scroll_row * columns;
    let last = (first + visible_rows * columns).min(state.cards.len());

    for (offset, card) in state.cards[first.min(last)..last].iter().enumerate() {
        let index = first + offset;
        let row = (offset / columns) as u16;
        let col = (offset % columns) as u16;
        let rect = Rect {
            x: area.x + col * CARD_WIDTH,
            y: area.y + row * CARD_HEIGHT,
            width: CARD_WIDTH.min(area.width),
            height: CARD_HEIGHT,
        };

        let style = if index == state.focused {
            palette.focused
        } else {
            palette.card
        };

        let card_widget = Paragraph::new(vec![
            Line::from(truncate(&card.title, CARD_WIDTH as usize - 4)),
            Line::from(Span::styled(
                truncate(&card.author_name, CARD_WIDTH as usize - 4),
                if index == state.focused { style } else { palette.muted },
            )),
        ])
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(style),
        );
        frame.render_widget(card_widget, rect);
    }
}

fn render_show_more(frame: &mut Frame, area: Rect, state: &BrowserState, palette: &Palette) {
    let style = if state.show_more_enabled() {
        palette.highlight
    } else {
        palette.disabled
    };

    let button = Paragraph::new(state.store.show_more_label())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(style),
        );
    frame.render_widget(button, area);
}

fn render_help(frame: &mut Frame, area: Rect, palette: &Palette) {
    let help_text = Line::from(vec![
        Span::styled("[/]", palette.highlight),
        Span::raw(" Search  "),
        Span::styled("[s]", palette.highlight),
        Span::raw(" Settings  "),
        Span::styled("[←↑↓→]", palette.highlight),
        Span::raw(" Move  "),
        Span::styled("[Enter]", palette.highlight),
        Span::raw(" Details  "),
        Span::styled("[m]", palette.highlight),
        Span::raw(" Show more  "),
        Span::styled("[q]", palette.highlight),
        Span::raw(" Quit"),
    ]);
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(palette.muted);
    frame.render_widget(help, area);
}

/// Cut `text` to `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
