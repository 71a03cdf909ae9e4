//! End-to-end browsing scenarios against the public catalog API

use bookconnect_core::catalog::{
    select_options, Book, CatalogStore, Dataset, Filter, FilterForm, Selector, ALL_GENRES_LABEL,
};
use bookconnect_core::view::{preview_cards, BookDetail};
use bookconnect_core::CatalogError;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use std::path::Path;

fn generated_dataset(count: usize) -> Dataset {
    let books = (0..count)
        .map(|i| Book {
            id: format!("book-{i:02}"),
            title: format!("Volume {i}"),
            author: "anon".to_string(),
            image: format!("https://covers.example.org/{i}.jpg"),
            description: format!("Volume number {i}."),
            genres: vec!["misc".to_string()],
            published: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
        })
        .collect();

    Dataset {
        books,
        authors: [("anon", "Anonymous")].into_iter().collect(),
        genres: [("misc", "Miscellany")].into_iter().collect(),
    }
}

fn fixture_store(page_size: usize) -> CatalogStore {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/small_catalog.json");
    CatalogStore::new(Dataset::load(&path).unwrap(), page_size).unwrap()
}

fn ids(books: &[&Book]) -> Vec<String> {
    books.iter().map(|b| b.id.clone()).collect()
}

#[test]
fn test_show_more_walkthrough() {
    let mut store = CatalogStore::new(generated_dataset(25), 10).unwrap();

    assert_eq!(store.visible_slice().len(), 10);
    assert_eq!(store.show_more_label(), "Show more (15)");

    let second = ids(&store.reveal_next_page().items);
    assert_eq!(second.first().map(String::as_str), Some("book-10"));
    assert_eq!(second.last().map(String::as_str), Some("book-19"));
    assert_eq!(store.remaining_count(), 5);

    let third = store.reveal_next_page();
    assert_eq!(third.items.len(), 5);
    assert!(!third.has_more);
    assert_eq!(store.remaining_count(), 0);

    let fourth = store.reveal_next_page();
    assert!(fourth.items.is_empty());
    assert_eq!(store.revealed_pages(), 3);
}

#[test]
fn test_genre_filter_matches_any_listed_genre() {
    let mut store = fixture_store(10);
    let outcome = store.apply_filter(Filter::any().with_genre(Selector::id("fiction")));

    assert_eq!(ids(&outcome.results), vec!["book-a", "book-c"]);
    assert!(!outcome.is_empty);
}

#[test]
fn test_form_submission_with_missing_fields() {
    let mut store = fixture_store(10);
    let form = FilterForm {
        title: Some("EMMA".to_string()),
        author: None,
        genre: None,
    };

    let outcome = store.apply_filter(form.into());
    assert_eq!(ids(&outcome.results), vec!["book-b"]);
}

#[test]
fn test_no_results_then_recover() {
    let mut store = fixture_store(2);

    let outcome = store.apply_filter(
        Filter::any()
            .with_author(Selector::id("a-austen"))
            .with_genre(Selector::id("satire")),
    );
    assert!(outcome.is_empty);
    assert_eq!(store.remaining_count(), 0);

    let outcome = store.apply_filter(Filter::any());
    assert_eq!(outcome.results.len(), 3);
    assert_eq!(store.visible_slice().len(), 2);
    assert_eq!(store.remaining_count(), 1);
}

#[test]
fn test_selecting_a_card_opens_its_detail() {
    let mut store = fixture_store(10);
    store.apply_filter(Filter::any().with_title("emma"));

    let cards = preview_cards(&store.visible_slice(), store.authors());
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].author_name, "Jane Austen");

    // A card rendered before the filter changed must still resolve.
    let book = store.find_by_id("book-c").unwrap();
    let detail = BookDetail::from_book(book, store.authors());
    assert_eq!(detail.title, "Nineteen Eighty-Four");
    assert_eq!(detail.subtitle, "George Orwell (1949)");

    assert!(store.find_by_id("nonexistent-id").is_none());
    assert!(matches!(
        store.require_by_id("nonexistent-id"),
        Err(CatalogError::NotFound { .. })
    ));
}

#[test]
fn test_genre_dropdown_from_fixture() {
    let store = fixture_store(10);
    let labels: Vec<String> = select_options(store.genres(), ALL_GENRES_LABEL)
        .into_iter()
        .map(|o| o.label)
        .collect();
    assert_eq!(labels, vec!["All Genres", "Fiction", "Drama", "Satire"]);
}
