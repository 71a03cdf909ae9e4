//! Interactive terminal browser
pub mod app;
pub mod events;
pub mod modal;
pub mod screens;
pub mod state;
pub mod theme;

use anyhow::Result;

use bookconnect_core::catalog::CatalogStore;
use bookconnect_core::theme::ThemeMode;

/// Entry point for the browser
pub async fn run_browser(store: CatalogStore, theme: ThemeMode) -> Result<()> {
    let app = app::App::new(store, theme);
    app.run().await
}
