//! Search overlay: title input plus genre and author dropdowns

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::modal::{centered_rect, open_modal};
use crate::tui::state::{Dropdown, SearchField, SearchForm};
use crate::tui::theme::Palette;

pub fn render(frame: &mut Frame, form: &SearchForm, palette: &Palette) {
    let modal_area = centered_rect(60, 50, frame.area());
    let inner = open_modal(frame, modal_area, "Search", palette);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Genre
            Constraint::Length(2), // Author
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(inner);

    render_title_input(frame, chunks[0], form, palette);
    render_dropdown(
        frame,
        chunks[1],
        "Genre",
        &form.genres,
        form.field == SearchField::Genre,
        palette,
    );
    render_dropdown(
        frame,
        chunks[2],
        "Author",
        &form.authors,
        form.field == SearchField::Author,
        palette,
    );

    let help_text = Line::from(vec![
        Span::styled("[Tab]", palette.highlight),
        Span::raw(" Next field  "),
        Span::styled("[←/→]", palette.highlight),
        Span::raw(" Change  "),
        Span::styled("[Enter]", palette.highlight),
        Span::raw(" Search  "),
        Span::styled("[Esc]", palette.highlight),
        Span::raw(" Cancel"),
    ]);
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(palette.muted);
    frame.render_widget(help, chunks[4]);
}

fn label_style(focused: bool, palette: &Palette) -> ratatui::style::Style {
    if focused {
        palette.highlight
    } else {
        palette.base
    }
}

fn render_title_input(frame: &mut Frame, area: Rect, form: &SearchForm, palette: &Palette) {
    let focused = form.field == SearchField::Title;
    let value = form.title.value();
    let cursor = form.title.cursor().min(value.chars().count());
    let before: String = value.chars().take(cursor).collect();
    let after: String = value.chars().skip(cursor).collect();

    let mut spans = vec![
        Span::styled("Title:  ", label_style(focused, palette)),
        Span::styled(before, palette.base),
    ];
    if focused {
        spans.push(Span::styled("█", palette.base));
    }
    spans.push(Span::styled(after, palette.base));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_dropdown(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    dropdown: &Dropdown,
    focused: bool,
    palette: &Palette,
) {
    let current = dropdown
        .current()
        .map(|o| o.label.as_str())
        .unwrap_or_default();
    let position = format!("  {}/{}", dropdown.selected + 1, dropdown.options.len());

    let line = Line::from(vec![
        Span::styled(format!("{label}:  "), label_style(focused, palette)),
        Span::styled(if focused { "◀ " } else { "  " }, palette.muted),
        Span::styled(current.to_string(), label_style(focused, palette)),
        Span::styled(if focused { " ▶" } else { "  " }, palette.muted),
        Span::styled(position, palette.muted),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
