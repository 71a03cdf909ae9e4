//! The authoritative filtered, paginated view over the dataset

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use super::{AuthorTable, Book, Dataset, Filter, GenreTable, PageCursor};
use crate::{CatalogError, Result};

/// Books revealed per page when no page size is configured
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Result of [`CatalogStore::apply_filter`]
#[derive(Debug)]
pub struct FilterOutcome<'a> {
    /// The full new result set, in dataset order
    pub results: Vec<&'a Book>,
    /// True when no book matched
    pub is_empty: bool,
}

/// Result of [`CatalogStore::reveal_next_page`]
#[derive(Debug)]
pub struct PageReveal<'a> {
    /// Only the newly exposed items
    pub items: Vec<&'a Book>,
    /// Whether further pages remain after this one
    pub has_more: bool,
}

/// Result set and cursor, always replaced as one unit
#[derive(Debug, Clone)]
struct ResultView {
    filter: Filter,
    /// Positions into `Dataset::books`, ascending
    positions: Vec<usize>,
    cursor: PageCursor,
}

/// Owns the dataset and the current result set
///
/// All state changes go through [`apply_filter`](Self::apply_filter) and
/// [`reveal_next_page`](Self::reveal_next_page). The store is a plain owned
/// value; callers that share it across threads must wrap it in a mutex so
/// that the result set and cursor are never observed half-updated.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    dataset: Dataset,
    index: HashMap<String, usize>,
    view: ResultView,
}

impl CatalogStore {
    /// Initialize the store with the full dataset as the result set
    ///
    /// Fails with [`CatalogError::Configuration`] when `page_size` is zero.
    pub fn new(dataset: Dataset, page_size: usize) -> Result<Self> {
        let cursor = PageCursor::new(page_size)?;

        let mut index = HashMap::with_capacity(dataset.books.len());
        for (pos, book) in dataset.books.iter().enumerate() {
            if index.insert(book.id.clone(), pos).is_some() {
                return Err(CatalogError::Integrity(format!(
                    "duplicate book id '{}'",
                    book.id
                )));
            }
        }

        let positions = (0..dataset.books.len()).collect();
        debug!(
            books = dataset.books.len(),
            page_size, "Initialized catalog store"
        );

        Ok(Self {
            dataset,
            index,
            view: ResultView {
                filter: Filter::any(),
                positions,
                cursor,
            },
        })
    }

    /// Replace the result set with the books matching `filter`
    ///
    /// Always evaluated against the full dataset; filters do not compose.
    /// Resets the cursor to the first page.
    pub fn apply_filter(&mut self, filter: Filter) -> FilterOutcome<'_> {
        let positions: Vec<usize> = {
            let predicate = filter.predicate();
            self.dataset
                .books
                .iter()
                .enumerate()
                .filter(|(_, book)| predicate.matches(book))
                .map(|(pos, _)| pos)
                .collect()
        };

        let mut cursor = self.view.cursor;
        cursor.reset();

        debug!(
            title = %filter.title_query,
            author = filter.author.as_str(),
            genre = filter.genre.as_str(),
            matches = positions.len(),
            "Applied catalog filter"
        );

        self.view = ResultView {
            filter,
            positions,
            cursor,
        };

        let results = self.books_at(&self.view.positions);
        FilterOutcome {
            is_empty: results.is_empty(),
            results,
        }
    }

    /// Reveal the next page of the result set
    ///
    /// Returns only the newly exposed slice. When nothing remains this is a
    /// no-op returning an empty slice with `has_more == false`.
    pub fn reveal_next_page(&mut self) -> PageReveal<'_> {
        let total = self.view.positions.len();
        let Some(range) = self.view.cursor.advance(total) else {
            trace!(
                revealed_pages = self.view.cursor.revealed_pages(),
                "No further pages to reveal"
            );
            return PageReveal {
                items: Vec::new(),
                has_more: false,
            };
        };

        debug!(
            revealed_pages = self.view.cursor.revealed_pages(),
            start = range.start,
            end = range.end,
            "Revealed next page"
        );

        let has_more = self.view.cursor.has_more(total);
        PageReveal {
            items: self.books_at(&self.view.positions[range]),
            has_more,
        }
    }

    /// Every item revealed so far, for a full re-render
    pub fn visible_slice(&self) -> Vec<&Book> {
        let visible = self.view.cursor.revealed_items(self.view.positions.len());
        self.books_at(&self.view.positions[..visible])
    }

    /// Items of the result set not yet revealed
    pub fn remaining_count(&self) -> usize {
        self.view.cursor.remaining(self.view.positions.len())
    }

    /// Label for the "show more" affordance
    pub fn show_more_label(&self) -> String {
        format!("Show more ({})", self.remaining_count())
    }

    /// Look up a book in the full dataset, ignoring the active filter
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        let found = self.index.get(id).map(|&pos| &self.dataset.books[pos]);
        if found.is_none() {
            warn!(id, "Book lookup missed");
        }
        found
    }

    /// Like [`find_by_id`](Self::find_by_id) but as a `Result`
    pub fn require_by_id(&self, id: &str) -> Result<&Book> {
        self.find_by_id(id).ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    /// The full current result set
    pub fn results(&self) -> Vec<&Book> {
        self.books_at(&self.view.positions)
    }

    pub fn result_len(&self) -> usize {
        self.view.positions.len()
    }

    pub fn revealed_pages(&self) -> usize {
        self.view.cursor.revealed_pages()
    }

    pub fn page_size(&self) -> usize {
        self.view.cursor.page_size()
    }

    /// The filter that produced the current result set
    pub fn current_filter(&self) -> &Filter {
        &self.view.filter
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn authors(&self) -> &AuthorTable {
        &self.dataset.authors
    }

    pub fn genres(&self) -> &GenreTable {
        &self.dataset.genres
    }

    /// Display name of a book's author
    pub fn author_name(&self, book: &Book) -> Option<&str> {
        self.dataset.authors.name(&book.author)
    }

    fn books_at(&self, positions: &[usize]) -> Vec<&Book> {
        positions
            .iter()
            .map(|&pos| &self.dataset.books[pos])
            .collect()
    }
}
