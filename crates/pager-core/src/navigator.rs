//! Pagination display state.
//!
//! Tracks the current page of a listing and clamps every navigation request
//! into `[1, total_pages]` before the range calculator sees it. Knows nothing
//! about rendering; a UI turns [`PageView`] into controls.

use crate::error::PagerError;
use crate::pagination::{compute_range, total_pages_for, RangeToken, DEFAULT_SIBLING_COUNT};
use crate::result::PagerResult;
use serde::Serialize;

/// Check that `current_page` is a valid page of a `total_pages` listing.
pub fn validate(total_pages: usize, current_page: usize) -> PagerResult<()> {
    if total_pages == 0 {
        return Err(PagerError::NoPages);
    }
    if current_page == 0 || current_page > total_pages {
        return Err(PagerError::PageOutOfRange {
            page: current_page,
            total_pages,
        });
    }
    Ok(())
}

/// Everything a pagination control needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub current_page: usize,
    pub total_pages: usize,
    pub tokens: Vec<RangeToken>,
    pub status: String,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Current-page state for a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNavigator {
    total_pages: usize,
    current_page: usize,
    sibling_count: usize,
}

impl PageNavigator {
    /// Start on page 1. A zero page count is raised to one empty page.
    pub fn new(total_pages: usize) -> Self {
        Self {
            total_pages: total_pages.max(1),
            current_page: 1,
            sibling_count: DEFAULT_SIBLING_COUNT,
        }
    }

    pub fn from_items(total_items: usize, page_size: usize) -> PagerResult<Self> {
        Ok(Self::new(total_pages_for(total_items, page_size)?))
    }

    pub fn with_sibling_count(mut self, sibling_count: usize) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn sibling_count(&self) -> usize {
        self.sibling_count
    }

    /// Move to `page`, clamped into `[1, total_pages]`. Returns the page
    /// actually selected.
    pub fn go_to(&mut self, page: usize) -> usize {
        let clamped = page.clamp(1, self.total_pages);
        if clamped != page {
            tracing::debug!(
                requested = page,
                clamped,
                total_pages = self.total_pages,
                "Clamped page request"
            );
        }
        self.current_page = clamped;
        clamped
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current_page.saturating_add(1))
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.current_page.saturating_sub(1))
    }

    pub fn first(&mut self) -> usize {
        self.go_to(1)
    }

    pub fn last(&mut self) -> usize {
        self.go_to(self.total_pages)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Update the page count, keeping the current page in range.
    pub fn set_total_pages(&mut self, total_pages: usize) {
        self.total_pages = total_pages.max(1);
        if self.current_page > self.total_pages {
            self.current_page = self.total_pages;
        }
    }

    /// Zero-based index of the first item on the current page.
    pub fn offset(&self, page_size: usize) -> usize {
        (self.current_page - 1).saturating_mul(page_size)
    }

    pub fn tokens(&self) -> Vec<RangeToken> {
        let tokens = compute_range(self.total_pages, self.current_page, self.sibling_count);
        if tokens.is_empty() {
            tracing::error!(
                total_pages = self.total_pages,
                current_page = self.current_page,
                sibling_count = self.sibling_count,
                "Page range came back empty for a non-empty listing"
            );
        }
        tokens
    }

    pub fn status_label(&self) -> String {
        format!("Page {} / {}", self.current_page, self.total_pages)
    }

    pub fn view(&self) -> PageView {
        PageView {
            current_page: self.current_page,
            total_pages: self.total_pages,
            tokens: self.tokens(),
            status: self.status_label(),
            has_prev: self.has_prev(),
            has_next: self.has_next(),
        }
    }
}

impl Default for PageNavigator {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::RangeToken::{Ellipsis, Page};

    #[test]
    fn test_new_starts_on_first_page() {
        let nav = PageNavigator::new(20);
        assert_eq!(nav.current_page(), 1);
        assert_eq!(nav.total_pages(), 20);
        assert_eq!(nav.sibling_count(), 1);
        assert!(!nav.has_prev());
        assert!(nav.has_next());
    }

    #[test]
    fn test_zero_pages_becomes_one() {
        let nav = PageNavigator::new(0);
        assert_eq!(nav.total_pages(), 1);
        assert_eq!(nav.tokens(), vec![Page(1)]);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut nav = PageNavigator::new(20);
        assert_eq!(nav.go_to(7), 7);
        assert_eq!(nav.go_to(0), 1);
        assert_eq!(nav.go_to(21), 20);
        assert_eq!(nav.current_page(), 20);
    }

    #[test]
    fn test_next_prev_at_boundaries() {
        let mut nav = PageNavigator::new(3);
        assert_eq!(nav.prev(), 1);
        assert_eq!(nav.next(), 2);
        assert_eq!(nav.next(), 3);
        assert_eq!(nav.next(), 3);
        assert!(!nav.has_next());
        assert_eq!(nav.first(), 1);
        assert_eq!(nav.last(), 3);
    }

    #[test]
    fn test_set_total_pages_clamps_current() {
        let mut nav = PageNavigator::new(20);
        nav.go_to(15);
        nav.set_total_pages(10);
        assert_eq!(nav.current_page(), 10);

        nav.set_total_pages(30);
        assert_eq!(nav.current_page(), 10);
    }

    #[test]
    fn test_from_items() {
        let nav = PageNavigator::from_items(95, 10).unwrap();
        assert_eq!(nav.total_pages(), 10);

        assert!(matches!(
            PageNavigator::from_items(95, 0),
            Err(PagerError::InvalidPageSize)
        ));
    }

    #[test]
    fn test_offset() {
        let mut nav = PageNavigator::new(10);
        assert_eq!(nav.offset(10), 0);
        nav.go_to(4);
        assert_eq!(nav.offset(10), 30);
    }

    #[test]
    fn test_status_label() {
        let mut nav = PageNavigator::new(20);
        nav.go_to(10);
        assert_eq!(nav.status_label(), "Page 10 / 20");
    }

    #[test]
    fn test_view_uses_sibling_count() {
        let mut nav = PageNavigator::new(20).with_sibling_count(0);
        nav.go_to(10);
        let view = nav.view();
        assert_eq!(view.tokens, vec![Page(1), Ellipsis, Page(10), Ellipsis, Page(20)]);
        assert_eq!(view.status, "Page 10 / 20");
        assert!(view.has_prev);
        assert!(view.has_next);
    }

    #[test]
    fn test_validate() {
        assert!(validate(20, 1).is_ok());
        assert!(validate(20, 20).is_ok());
        assert!(matches!(validate(0, 1), Err(PagerError::NoPages)));
        assert!(matches!(
            validate(20, 0),
            Err(PagerError::PageOutOfRange {
                page: 0,
                total_pages: 20
            })
        ));
        assert!(matches!(
            validate(20, 21),
            Err(PagerError::PageOutOfRange { page: 21, .. })
        ));
    }
}
