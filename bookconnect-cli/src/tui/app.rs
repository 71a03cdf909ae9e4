use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::debug;
use tui_input::backend::crossterm::EventHandler;

use bookconnect_core::catalog::CatalogStore;
use bookconnect_core::theme::ThemeMode;

use super::events::AppEvent;
use super::state::{BrowserState, Overlay, SearchField};
use super::theme::Palette;

/// Window in which a second Ctrl+C exits
const DOUBLE_CTRL_C: Duration = Duration::from_millis(1000);

/// Main application struct
pub struct App {
    /// Grid, overlays and the store behind them
    state: BrowserState,
    /// Whether the app should quit
    should_quit: bool,
    /// Styles for the applied theme
    palette: Palette,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<Instant>,
}

impl App {
    pub fn new(store: CatalogStore, theme: ThemeMode) -> Self {
        Self {
            state: BrowserState::new(store, theme),
            should_quit: false,
            palette: Palette::for_mode(theme),
            last_ctrl_c: None,
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        let input = tokio::task::spawn_blocking(move || read_input(event_tx));

        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Dropping the receiver stops the input task
        drop(event_rx);
        ratatui::restore();
        let _ = input.await;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event)?,
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick)?,
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        super::screens::grid::render(frame, &mut self.state, &self.palette);

        match &self.state.overlay {
            Overlay::None => {}
            Overlay::Search => {
                super::screens::search::render(frame, &self.state.search, &self.palette);
            }
            Overlay::Settings => {
                super::screens::settings::render(frame, self.state.pending_theme, &self.palette);
            }
            Overlay::Detail(detail) => {
                super::screens::detail::render(frame, detail, &self.palette);
            }
        }
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        let key = match event {
            AppEvent::Key(key) => key,
            AppEvent::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                return Ok(());
            }
            AppEvent::Tick => return Ok(()),
        };

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }

        match self.state.overlay {
            Overlay::None => self.handle_grid_key(key),
            Overlay::Search => self.handle_search_key(key),
            Overlay::Settings => self.handle_settings_key(key),
            Overlay::Detail(_) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    self.state.close_overlay();
                }
            }
        }

        Ok(())
    }

    /// Exit on a second Ctrl+C within one second
    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_ctrl_c {
            if now.duration_since(last) < DOUBLE_CTRL_C {
                self.should_quit = true;
                return;
            }
        }
        self.last_ctrl_c = Some(now);
        self.state.status = Some("Press Ctrl+C again to quit".to_string());
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('/') => self.state.open_search(),
            KeyCode::Char('s') => self.state.open_settings(),
            KeyCode::Char('m') => {
                if self.state.show_more_enabled() {
                    self.state.show_more();
                }
            }
            KeyCode::Left => self.state.move_focus(-1),
            KeyCode::Right => self.state.move_focus(1),
            KeyCode::Up => self.state.move_focus_rows(-1),
            KeyCode::Down => self.state.move_focus_rows(1),
            KeyCode::Enter => self.state.open_detail(),
            KeyCode::Esc => self.state.status = None,
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.search;
        match key.code {
            KeyCode::Esc => self.state.close_overlay(),
            KeyCode::Enter => self.state.submit_search(),
            KeyCode::Tab | KeyCode::Down => form.field = form.field.next(),
            KeyCode::BackTab | KeyCode::Up => form.field = form.field.previous(),
            _ => match form.field {
                SearchField::Title => {
                    form.title.handle_event(&Event::Key(key));
                }
                SearchField::Genre => match key.code {
                    KeyCode::Left => form.genres.previous(),
                    KeyCode::Right => form.genres.next(),
                    _ => {}
                },
                SearchField::Author => match key.code {
                    KeyCode::Left => form.authors.previous(),
                    KeyCode::Right => form.authors.next(),
                    _ => {}
                },
            },
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.close_overlay(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                self.state.pending_theme = self.state.pending_theme.toggle();
            }
            KeyCode::Enter => {
                self.state.apply_pending_theme();
                self.palette = Palette::for_mode(self.state.theme);
            }
            _ => {}
        }
    }
}

/// Forward terminal input until the receiver goes away
fn read_input(input_tx: UnboundedSender<AppEvent>) {
    while !input_tx.is_closed() {
        match event::poll(Duration::from_millis(100)) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(_) => break,
        }
        let Ok(event) = event::read() else {
            break;
        };
        let forwarded = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
            Event::Resize(width, height) => AppEvent::Resize(width, height),
            _ => continue,
        };
        if input_tx.send(forwarded).is_err() {
            break;
        }
    }
}
