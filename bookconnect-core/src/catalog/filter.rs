//! Filter predicates over the catalog
//!
//! A [`Filter`] is a pure predicate description: a title substring plus an
//! author selector and a genre selector. It is not tied to any form widget;
//! raw form submissions go through [`FilterForm`] which normalizes missing
//! fields.

use serde::{Deserialize, Serialize};

use super::Book;

/// Sentinel value that matches every author or genre
pub const ANY: &str = "any";

/// Author or genre selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selector {
    /// Matches every book
    #[default]
    Any,
    /// Matches books referencing this id
    Id(String),
}

impl Selector {
    /// Parse a raw selector value; absent, blank or `"any"` selects everything
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(ANY) => Selector::Any,
            Some(id) => Selector::Id(id.to_string()),
        }
    }

    pub fn id(id: impl Into<String>) -> Self {
        Selector::Id(id.into())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }

    /// Wire value (`"any"` or the id)
    pub fn as_str(&self) -> &str {
        match self {
            Selector::Any => ANY,
            Selector::Id(id) => id,
        }
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        Selector::parse(Some(&value))
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.as_str().to_string()
    }
}

/// Title/author/genre predicate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Case-insensitive substring; blank matches every title
    #[serde(default)]
    pub title_query: String,

    #[serde(default)]
    pub author: Selector,

    #[serde(default)]
    pub genre: Selector,
}

impl Filter {
    /// The identity filter, matching the whole dataset
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, query: impl Into<String>) -> Self {
        self.title_query = query.into();
        self
    }

    pub fn with_author(mut self, author: Selector) -> Self {
        self.author = author;
        self
    }

    pub fn with_genre(mut self, genre: Selector) -> Self {
        self.genre = genre;
        self
    }

    /// Whether this filter accepts every book
    pub fn is_identity(&self) -> bool {
        self.title_query.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }

    /// Evaluate the predicate for a single book
    pub fn matches(&self, book: &Book) -> bool {
        self.predicate().matches(book)
    }

    /// Prepare the predicate for evaluation over many books
    pub(crate) fn predicate(&self) -> Predicate<'_> {
        let needle = if self.title_query.trim().is_empty() {
            None
        } else {
            Some(self.title_query.to_lowercase())
        };
        Predicate {
            needle,
            filter: self,
        }
    }
}

/// A filter with its title query lowercased once
pub(crate) struct Predicate<'a> {
    needle: Option<String>,
    filter: &'a Filter,
}

impl Predicate<'_> {
    pub(crate) fn matches(&self, book: &Book) -> bool {
        self.title_matches(book) && self.author_matches(book) && self.genre_matches(book)
    }

    fn title_matches(&self, book: &Book) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => book.title.to_lowercase().contains(needle.as_str()),
        }
    }

    fn author_matches(&self, book: &Book) -> bool {
        match &self.filter.author {
            Selector::Any => true,
            Selector::Id(id) => book.author == *id,
        }
    }

    // A book with several genres matches when any one of them does.
    fn genre_matches(&self, book: &Book) -> bool {
        match &self.filter.genre {
            Selector::Any => true,
            Selector::Id(id) => book.in_genre(id),
        }
    }
}

/// A raw, possibly partial filter-form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterForm {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub genre: Option<String>,
}

impl From<FilterForm> for Filter {
    fn from(form: FilterForm) -> Self {
        Filter {
            title_query: form.title.unwrap_or_default(),
            author: Selector::parse(form.author.as_deref()),
            genre: Selector::parse(form.genre.as_deref()),
        }
    }
}
