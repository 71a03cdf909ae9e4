//! BookConnect Catalog - filtering and paginated browsing
//!
//! This module owns the in-memory book dataset and the view state derived
//! from it.
//!
//! # Overview
//!
//! The catalog system allows callers to:
//! - Filter the dataset by title, author and genre
//! - Reveal the current result set one page at a time
//! - Resolve a book by id regardless of the active filter
//! - Build dropdown options for the author and genre selectors
//!
//! # Architecture
//!
//! ```text
//! Dataset (books + author/genre tables)
//!     │
//!     ├── apply_filter(Filter) ──► ResultSet + PageCursor (replaced together)
//!     │                                 │
//!     │                                 ├── visible_slice()
//!     │                                 ├── reveal_next_page()
//!     │                                 └── remaining_count()
//!     │
//!     └── find_by_id(id)       ──► id index over the full dataset
//! ```

mod book;
mod cursor;
mod dataset;
mod filter;
mod options;
mod store;
mod table;

pub use book::Book;
pub use cursor::PageCursor;
pub use dataset::{Dataset, DatasetFormat};
pub use filter::{Filter, FilterForm, Selector, ANY};
pub use options::{select_options, SelectOption, ALL_AUTHORS_LABEL, ALL_GENRES_LABEL};
pub use store::{CatalogStore, FilterOutcome, PageReveal, DEFAULT_PAGE_SIZE};
pub use table::{AuthorTable, GenreTable, LookupTable};

#[cfg(test)]
mod tests;
