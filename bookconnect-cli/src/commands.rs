//! Non-interactive catalog commands
//!
//! Each command loads the configured dataset into a [`CatalogStore`], runs
//! one filter/reveal/lookup sequence, and writes the result to `out` as a
//! table or as JSON.

use std::io::Write;

use anyhow::{Context, Result};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::{debug, info};

use bookconnect_core::catalog::{
    select_options, CatalogStore, Filter, FilterForm, SelectOption, ALL_AUTHORS_LABEL,
    ALL_GENRES_LABEL,
};
use bookconnect_core::config::BrowserConfig;
use bookconnect_core::theme::ThemeMode;
use bookconnect_core::view::{preview_cards, BookDetail, PreviewCard};

/// Message shown when a filter matches nothing
pub const NO_RESULTS_MESSAGE: &str = "No results found. Your filters might be too narrow.";

/// Build the store from a resolved configuration
pub fn open_store(config: &BrowserConfig) -> Result<CatalogStore> {
    let dataset = config
        .load_dataset()
        .context("Failed to load the catalog dataset")?;
    let store = CatalogStore::new(dataset, config.page_size)
        .context("Failed to initialize the catalog")?;
    info!(
        books = store.dataset().len(),
        page_size = store.page_size(),
        "Catalog ready"
    );
    Ok(store)
}

/// Table row for a preview card
#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
}

impl CardRow {
    fn new(position: usize, card: PreviewCard) -> Self {
        let title = if card.title.chars().count() > 50 {
            let truncated: String = card.title.chars().take(47).collect();
            format!("{truncated}...")
        } else {
            card.title
        };

        Self {
            position,
            id: card.id,
            title,
            author: card.author_name,
        }
    }
}

/// Table row for a dropdown option
#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Label")]
    label: String,
}

/// `list`: the unfiltered catalog
pub fn execute_list(
    out: &mut impl Write,
    store: &mut CatalogStore,
    pages: usize,
    json_output: bool,
) -> Result<()> {
    print_pages(out, store, pages, json_output)
}

/// `search`: apply a filter, then reveal pages
pub fn execute_search(
    out: &mut impl Write,
    store: &mut CatalogStore,
    form: FilterForm,
    pages: usize,
    json_output: bool,
) -> Result<()> {
    let filter = Filter::from(form);
    let is_empty = store.apply_filter(filter).is_empty;
    debug!(is_empty, matches = store.result_len(), "Search complete");

    if is_empty && !json_output {
        writeln!(out, "{NO_RESULTS_MESSAGE}")?;
        return Ok(());
    }

    print_pages(out, store, pages, json_output)
}

/// `show`: detail view for one book; a miss is reported, not fatal
pub fn execute_show(
    out: &mut impl Write,
    store: &CatalogStore,
    id: &str,
    json_output: bool,
) -> Result<()> {
    let Some(book) = store.find_by_id(id) else {
        writeln!(out, "No book with id '{id}' in this catalog.")?;
        return Ok(());
    };

    let detail = BookDetail::from_book(book, store.authors());

    if json_output {
        let genres: Vec<&str> = book
            .genres
            .iter()
            .map(|g| store.genres().name(g).unwrap_or(g.as_str()))
            .collect();
        let output = serde_json::json!({
            "id": detail.id,
            "title": detail.title,
            "subtitle": detail.subtitle,
            "image": detail.image,
            "description": detail.description,
            "genres": genres,
            "published": book.published.to_rfc3339(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(out)?;
        writeln!(out, "{}", detail.title)?;
        writeln!(out, "{}", detail.subtitle)?;
        writeln!(out)?;
        for line in detail.description.lines() {
            writeln!(out, "  {line}")?;
        }
        writeln!(out)?;
        writeln!(out, "Cover: {}", detail.image)?;
    }

    Ok(())
}

/// `authors`: author dropdown options
pub fn execute_authors(
    out: &mut impl Write,
    store: &CatalogStore,
    json_output: bool,
) -> Result<()> {
    let options = select_options(store.authors(), ALL_AUTHORS_LABEL);
    print_options(out, &options, json_output)
}

/// `genres`: genre dropdown options
pub fn execute_genres(out: &mut impl Write, store: &CatalogStore, json_output: bool) -> Result<()> {
    let options = select_options(store.genres(), ALL_GENRES_LABEL);
    print_options(out, &options, json_output)
}

/// `theme`: the display variables a mode sets
pub fn execute_theme(out: &mut impl Write, mode: ThemeMode) -> Result<()> {
    writeln!(out, "theme: {mode}")?;
    for (name, value) in mode.variables().as_pairs() {
        writeln!(out, "{name}: {value};")?;
    }
    Ok(())
}

/// Reveal `pages` pages (at least the first) and print what is visible
fn print_pages(
    out: &mut impl Write,
    store: &mut CatalogStore,
    pages: usize,
    json_output: bool,
) -> Result<()> {
    for _ in 1..pages.max(1) {
        if !store.reveal_next_page().has_more {
            break;
        }
    }

    let cards = preview_cards(&store.visible_slice(), store.authors());

    if json_output {
        let output = serde_json::json!({
            "books": cards,
            "revealed_pages": store.revealed_pages(),
            "total": store.result_len(),
            "remaining": store.remaining_count(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    let rows: Vec<CardRow> = cards
        .into_iter()
        .enumerate()
        .map(|(i, card)| CardRow::new(i + 1, card))
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();
    writeln!(out, "{table}")?;

    if store.remaining_count() > 0 {
        writeln!(out, "{}", store.show_more_label())?;
    } else {
        writeln!(out, "Showing all {} book(s).", store.result_len())?;
    }

    Ok(())
}

fn print_options(out: &mut impl Write, options: &[SelectOption], json_output: bool) -> Result<()> {
    if json_output {
        writeln!(out, "{}", serde_json::to_string_pretty(options)?)?;
        return Ok(());
    }

    let rows: Vec<OptionRow> = options
        .iter()
        .map(|o| OptionRow {
            value: o.value.clone(),
            label: o.label.clone(),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    writeln!(out, "{table}")?;
    Ok(())
}
