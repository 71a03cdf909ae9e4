use tracing::{debug, warn};
use tui_input::Input;

use bookconnect_core::catalog::{
    select_options, CatalogStore, FilterForm, SelectOption, ALL_AUTHORS_LABEL, ALL_GENRES_LABEL,
};
use bookconnect_core::theme::ThemeMode;
use bookconnect_core::view::{preview_cards, BookDetail, PreviewCard};

/// Which overlay, if any, sits on top of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Search,
    Settings,
    Detail(BookDetail),
}

/// Fields of the search overlay, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Genre,
    Author,
}

impl SearchField {
    pub fn next(self) -> Self {
        match self {
            SearchField::Title => SearchField::Genre,
            SearchField::Genre => SearchField::Author,
            SearchField::Author => SearchField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SearchField::Title => SearchField::Author,
            SearchField::Genre => SearchField::Title,
            SearchField::Author => SearchField::Genre,
        }
    }
}

/// A select box over dropdown options
#[derive(Debug, Clone)]
pub struct Dropdown {
    pub options: Vec<SelectOption>,
    pub selected: usize,
}

impl Dropdown {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            selected: 0,
        }
    }

    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }

    pub fn current(&self) -> Option<&SelectOption> {
        self.options.get(self.selected)
    }
}

/// The search form; keeps its values between openings
#[derive(Debug, Clone)]
pub struct SearchForm {
    pub title: Input,
    pub genres: Dropdown,
    pub authors: Dropdown,
    pub field: SearchField,
}

impl SearchForm {
    pub fn new(store: &CatalogStore) -> Self {
        Self {
            title: Input::default(),
            genres: Dropdown::new(select_options(store.genres(), ALL_GENRES_LABEL)),
            authors: Dropdown::new(select_options(store.authors(), ALL_AUTHORS_LABEL)),
            field: SearchField::Title,
        }
    }

    /// The form submission this form currently describes
    pub fn submission(&self) -> FilterForm {
        FilterForm {
            title: Some(self.title.value().to_string()),
            author: self.authors.current().map(|o| o.value.clone()),
            genre: self.genres.current().map(|o| o.value.clone()),
        }
    }
}

/// State of the whole browser screen
#[derive(Debug)]
pub struct BrowserState {
    pub store: CatalogStore,
    /// Cards currently rendered in the grid
    pub cards: Vec<PreviewCard>,
    /// Index into `cards` of the focused card
    pub focused: usize,
    /// First grid row drawn
    pub scroll_row: usize,
    /// Cards per grid row, set from the last render
    pub columns: usize,
    pub show_no_results: bool,
    pub overlay: Overlay,
    pub search: SearchForm,
    /// Theme currently applied
    pub theme: ThemeMode,
    /// Theme selected in the settings overlay
    pub pending_theme: ThemeMode,
    pub status: Option<String>,
}

impl BrowserState {
    /// Start with the first page of the unfiltered catalog rendered
    pub fn new(store: CatalogStore, theme: ThemeMode) -> Self {
        let search = SearchForm::new(&store);
        let cards = preview_cards(&store.visible_slice(), store.authors());
        Self {
            show_no_results: cards.is_empty(),
            cards,
            store,
            focused: 0,
            scroll_row: 0,
            columns: 1,
            overlay: Overlay::None,
            search,
            theme,
            pending_theme: theme,
            status: None,
        }
    }

    /// Remaining count shown on the "show more" button
    pub fn remaining(&self) -> usize {
        self.store.remaining_count()
    }

    pub fn show_more_enabled(&self) -> bool {
        self.remaining() > 0
    }

    pub fn open_search(&mut self) {
        self.search.field = SearchField::Title;
        self.overlay = Overlay::Search;
    }

    pub fn open_settings(&mut self) {
        self.pending_theme = self.theme;
        self.overlay = Overlay::Settings;
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Submit the search form: full re-render from the top
    pub fn submit_search(&mut self) {
        let form = self.search.submission();
        let outcome = self.store.apply_filter(form.into());
        self.show_no_results = outcome.is_empty;
        self.cards = preview_cards(&self.store.visible_slice(), self.store.authors());
        self.focused = 0;
        self.scroll_row = 0;
        self.status = None;
        self.overlay = Overlay::None;
        debug!(
            matches = self.store.result_len(),
            rendered = self.cards.len(),
            "Search submitted"
        );
    }

    /// Append the next page of cards
    pub fn show_more(&mut self) {
        let added = self.store.reveal_next_page().items.len();
        if added == 0 {
            return;
        }
        let visible = self.store.visible_slice();
        let new_cards = preview_cards(&visible[visible.len() - added..], self.store.authors());
        self.cards.extend(new_cards);
    }

    /// Open the detail overlay for the focused card
    ///
    /// The card's id is resolved against the full dataset; a miss leaves
    /// the overlay closed.
    pub fn open_detail(&mut self) {
        let Some(card) = self.cards.get(self.focused) else {
            return;
        };
        match self.store.find_by_id(&card.id) {
            Some(book) => {
                self.overlay = Overlay::Detail(BookDetail::from_book(book, self.store.authors()));
            }
            None => {
                warn!(id = %card.id, "Focused card does not resolve to a book");
                self.status = Some(format!("Book '{}' is no longer available", card.id));
            }
        }
    }

    pub fn apply_pending_theme(&mut self) {
        self.theme = self.pending_theme;
        self.overlay = Overlay::None;
        debug!(theme = %self.theme, "Theme applied");
    }

    /// Move focus by `delta` cards, clamped to the rendered cards
    pub fn move_focus(&mut self, delta: isize) {
        if self.cards.is_empty() {
            return;
        }
        let last = self.cards.len() - 1;
        self.focused = self.focused.saturating_add_signed(delta).min(last);
    }

    pub fn move_focus_rows(&mut self, rows: isize) {
        self.move_focus(rows * self.columns.max(1) as isize);
    }

    /// Record the grid geometry and keep the focused row on screen
    pub fn set_viewport(&mut self, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        let visible_rows = visible_rows.max(1);
        let focused_row = self.focused / self.columns;
        if focused_row < self.scroll_row {
            self.scroll_row = focused_row;
        } else if focused_row >= self.scroll_row + visible_rows {
            self.scroll_row = focused_row + 1 - visible_rows;
        }
    }
}
