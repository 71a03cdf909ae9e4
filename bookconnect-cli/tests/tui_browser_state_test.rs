//! Drive the browser with synthetic key events, without a terminal

use bookconnect_cli::tui::app::App;
use bookconnect_cli::tui::events::AppEvent;
use bookconnect_cli::tui::state::{Overlay, SearchField};
use bookconnect_core::catalog::{CatalogStore, Dataset};
use bookconnect_core::theme::ThemeMode;
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;
use std::path::Path;

fn app_with_page_size(page_size: usize) -> App {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/small_catalog.json");
    let dataset = Dataset::load(&path).unwrap();
    App::new(CatalogStore::new(dataset, page_size).unwrap(), ThemeMode::Day)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn card_ids(app: &App) -> Vec<&str> {
    app.state().cards.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_first_page_and_show_more() {
    let mut app = app_with_page_size(2);
    assert_eq!(card_ids(&app), vec!["book-a", "book-b"]);
    assert_eq!(app.state().remaining(), 1);
    assert!(app.state().show_more_enabled());

    press(&mut app, KeyCode::Char('m'));
    assert_eq!(card_ids(&app), vec!["book-a", "book-b", "book-c"]);
    assert_eq!(app.state().remaining(), 0);
    assert!(!app.state().show_more_enabled());

    // Disabled button does nothing
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.state().cards.len(), 3);
}

#[test]
fn test_title_search_replaces_grid() {
    let mut app = app_with_page_size(2);
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.state().overlay, Overlay::Search);

    // 'q' is text while the title field has focus
    type_text(&mut app, "eQu");
    assert!(!app.should_quit());
    assert_eq!(app.state().search.title.value(), "eQu");

    for _ in 0..3 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "FARM");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state().overlay, Overlay::None);
    assert_eq!(card_ids(&app), vec!["book-a"]);
    assert!(!app.state().show_no_results);
    assert_eq!(app.state().remaining(), 0);
}

#[test]
fn test_genre_dropdown_search() {
    let mut app = app_with_page_size(2);
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().search.field, SearchField::Genre);

    // All genres -> Fiction -> Drama
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(
        app.state().search.genres.current().map(|o| o.value.as_str()),
        Some("drama")
    );
    press(&mut app, KeyCode::Enter);

    assert_eq!(card_ids(&app), vec!["book-a", "book-b"]);
    assert_eq!(app.state().remaining(), 0);
}

#[test]
fn test_author_dropdown_wraps_to_last_option() {
    let mut app = app_with_page_size(10);
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.state().search.field, SearchField::Author);

    press(&mut app, KeyCode::Left);
    assert_eq!(
        app.state().search.authors.current().map(|o| o.label.as_str()),
        Some("Jane Austen")
    );
    press(&mut app, KeyCode::Enter);
    assert_eq!(card_ids(&app), vec!["book-b"]);
}

#[test]
fn test_empty_search_shows_message_and_clears_grid() {
    let mut app = app_with_page_size(2);
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "zzz");
    press(&mut app, KeyCode::Enter);

    assert!(app.state().show_no_results);
    assert!(app.state().cards.is_empty());
    assert!(!app.state().show_more_enabled());

    // Enter on an empty grid opens nothing
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().overlay, Overlay::None);
}

#[test]
fn test_search_form_keeps_values_after_escape() {
    let mut app = app_with_page_size(2);
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "emma");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.state().overlay, Overlay::None);
    assert_eq!(card_ids(&app), vec!["book-a", "book-b"]);

    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.state().search.title.value(), "emma");
}

#[test]
fn test_detail_for_focused_card() {
    let mut app = app_with_page_size(2);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.state().focused, 1);

    // Focus is clamped to the rendered cards
    press(&mut app, KeyCode::Right);
    assert_eq!(app.state().focused, 1);

    press(&mut app, KeyCode::Enter);
    match &app.state().overlay {
        Overlay::Detail(detail) => {
            assert_eq!(detail.id, "book-b");
            assert_eq!(detail.title, "Emma");
            assert_eq!(detail.subtitle, "Jane Austen (1815)");
        }
        other => panic!("Expected detail overlay, got {other:?}"),
    }

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().overlay, Overlay::None);
}

#[test]
fn test_settings_apply_night_theme() {
    let mut app = app_with_page_size(2);
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.state().overlay, Overlay::Settings);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.state().pending_theme, ThemeMode::Night);
    assert_eq!(app.state().theme, ThemeMode::Day);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().theme, ThemeMode::Night);
    assert_eq!(app.state().overlay, Overlay::None);
    assert_eq!(app.palette().base.fg, Some(Color::Rgb(255, 255, 255)));
    assert_eq!(app.palette().base.bg, Some(Color::Rgb(10, 10, 20)));
}

#[test]
fn test_settings_escape_discards_selection() {
    let mut app = app_with_page_size(2);
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.state().theme, ThemeMode::Day);
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.state().pending_theme, ThemeMode::Day);
}

#[test]
fn test_quit_keys() {
    let mut app = app_with_page_size(2);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = app_with_page_size(2);
    let ctrl_c = || AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    app.handle_event(ctrl_c()).unwrap();
    assert!(!app.should_quit());
    assert!(app.state().status.is_some());
    app.handle_event(ctrl_c()).unwrap();
    assert!(app.should_quit());
}

mod rendering {
    use super::*;
    use pretty_assertions::assert_eq;
    use bookconnect_cli::tui::screens::grid;
    use bookconnect_cli::tui::state::BrowserState;
    use bookconnect_cli::tui::theme::Palette;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(state: &mut BrowserState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| grid::render(frame, state, &Palette::for_mode(ThemeMode::Day)))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state_with_page_size(page_size: usize) -> BrowserState {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/small_catalog.json");
        let store = CatalogStore::new(Dataset::load(&path).unwrap(), page_size).unwrap();
        BrowserState::new(store, ThemeMode::Day)
    }

    #[test]
    fn test_grid_shows_cards_and_remaining_count() {
        let mut state = state_with_page_size(2);
        let text = rendered_text(&mut state);

        assert!(text.contains("Animal Farm"));
        assert!(text.contains("Emma"));
        assert!(!text.contains("Nineteen"));
        assert!(text.contains("Show more (1)"));
        assert_eq!(state.columns, 2);
    }

    #[test]
    fn test_grid_shows_no_results_message() {
        let mut state = state_with_page_size(2);
        state.search.title = tui_input::Input::new("no such title".to_string());
        state.submit_search();

        let text = rendered_text(&mut state);
        assert!(text.contains("No results found. Your filters might be too narrow."));
        assert!(text.contains("Show more (0)"));
    }
}
