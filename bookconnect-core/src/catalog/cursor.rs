//! Page bookkeeping for the current result set

use std::num::NonZeroUsize;
use std::ops::Range;

use crate::{CatalogError, Result};

/// How many pages of the current result set have been revealed
///
/// Page 0 is always shown, so `revealed_pages` never drops below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    revealed_pages: usize,
    page_size: NonZeroUsize,
}

impl PageCursor {
    /// Create a cursor with the first page revealed
    pub fn new(page_size: usize) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size).ok_or_else(|| {
            CatalogError::Configuration(format!(
                "page size must be a positive integer (got {page_size})"
            ))
        })?;
        Ok(Self {
            revealed_pages: 1,
            page_size,
        })
    }

    pub fn revealed_pages(&self) -> usize {
        self.revealed_pages
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Number of items covered by the revealed pages, clipped to `total`
    pub fn revealed_items(&self, total: usize) -> usize {
        self.boundary().min(total)
    }

    /// Items of a `total`-sized result set not yet revealed
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.boundary())
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.remaining(total) > 0
    }

    /// Reveal one more page, returning the newly exposed index range
    ///
    /// Returns `None` and leaves the cursor untouched when nothing remains.
    pub fn advance(&mut self, total: usize) -> Option<Range<usize>> {
        if !self.has_more(total) {
            return None;
        }
        let start = self.boundary();
        self.revealed_pages += 1;
        Some(start..self.boundary().min(total))
    }

    /// Back to the first page
    pub fn reset(&mut self) {
        self.revealed_pages = 1;
    }

    fn boundary(&self) -> usize {
        self.revealed_pages.saturating_mul(self.page_size.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = PageCursor::new(0).unwrap_err();
        assert!(matches!(err, CatalogError::Configuration(_)));
    }

    #[test]
    fn test_advance_until_exhausted() {
        let mut cursor = PageCursor::new(10).unwrap();
        assert_eq!(cursor.revealed_items(25), 10);
        assert_eq!(cursor.remaining(25), 15);

        assert_eq!(cursor.advance(25), Some(10..20));
        assert_eq!(cursor.advance(25), Some(20..25));
        assert_eq!(cursor.remaining(25), 0);

        assert_eq!(cursor.advance(25), None);
        assert_eq!(cursor.revealed_pages(), 3);
    }

    #[test]
    fn test_small_result_set_stays_on_first_page() {
        let mut cursor = PageCursor::new(10).unwrap();
        assert_eq!(cursor.revealed_items(4), 4);
        assert_eq!(cursor.advance(4), None);
        assert_eq!(cursor.advance(0), None);
        assert_eq!(cursor.revealed_pages(), 1);
    }

    #[test]
    fn test_reset() {
        let mut cursor = PageCursor::new(2).unwrap();
        cursor.advance(10);
        cursor.advance(10);
        cursor.reset();
        assert_eq!(cursor.revealed_pages(), 1);
        assert_eq!(cursor.page_size(), 2);
    }
}
