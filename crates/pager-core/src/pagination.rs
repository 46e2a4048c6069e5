//! Page range calculation.
//!
//! Produces the sequence of page labels a pagination control shows: the
//! first and last page, a window of siblings around the current page, and
//! ellipsis markers standing in for the omitted runs. Pure functions with
//! no knowledge of rendering or click handling.

use crate::error::PagerError;
use crate::result::PagerResult;
use serde::{Serialize, Serializer};
use std::fmt;

/// Pages shown on each side of the current page unless configured otherwise.
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// Label rendered in place of an omitted run of pages.
pub const ELLIPSIS: &str = "...";

/// One entry of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeToken {
    /// A clickable, 1-based page number.
    Page(usize),
    /// A non-clickable placeholder for skipped pages.
    Ellipsis,
}

impl RangeToken {
    pub fn page(&self) -> Option<usize> {
        match self {
            RangeToken::Page(page) => Some(*page),
            RangeToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, RangeToken::Ellipsis)
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeToken::Page(page) => write!(f, "{}", page),
            RangeToken::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

/// Pages serialize as numbers and ellipses as `"..."`.
impl Serialize for RangeToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RangeToken::Page(page) => serializer.serialize_u64(*page as u64),
            RangeToken::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Maximum number of tokens before the range collapses into ellipses:
/// first, last, current, both sibling groups and two ellipsis slots.
pub fn total_slots(sibling_count: usize) -> usize {
    sibling_count.saturating_mul(2).saturating_add(5)
}

/// Compute the tokens for a pagination control.
///
/// `current_page` is expected to lie in `[1, total_pages]`; keeping it there
/// is the caller's job. `total_pages == 0` yields an empty sequence.
///
/// The ellipsis tests use strict inequalities: a sibling window that
/// reaches page 2 (or `total_pages - 1`) runs straight into the boundary
/// page with no ellipsis in between.
pub fn compute_range(
    total_pages: usize,
    current_page: usize,
    sibling_count: usize,
) -> Vec<RangeToken> {
    if total_pages == 0 {
        return Vec::new();
    }

    if total_pages <= total_slots(sibling_count) {
        return (1..=total_pages).map(RangeToken::Page).collect();
    }

    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = current_page
        .saturating_add(sibling_count)
        .min(total_pages);

    let show_left_ellipsis = left_sibling > 2;
    let show_right_ellipsis = right_sibling < total_pages - 1;

    // Both edge runs hold `3 + 2*s` pages; the trailing one starts
    // `2 + 2*s` pages before the last.
    let leading_run = 3 + 2 * sibling_count;
    let trailing_offset = 2 + 2 * sibling_count;

    match (show_left_ellipsis, show_right_ellipsis) {
        (false, true) => (1..=leading_run)
            .map(RangeToken::Page)
            .chain([RangeToken::Ellipsis, RangeToken::Page(total_pages)])
            .collect(),
        (true, false) => [RangeToken::Page(1), RangeToken::Ellipsis]
            .into_iter()
            .chain((total_pages - trailing_offset..=total_pages).map(RangeToken::Page))
            .collect(),
        (true, true) => [RangeToken::Page(1), RangeToken::Ellipsis]
            .into_iter()
            .chain((left_sibling..=right_sibling).map(RangeToken::Page))
            .chain([RangeToken::Ellipsis, RangeToken::Page(total_pages)])
            .collect(),
        // Unreachable once the slot budget is exceeded. Callers treat an
        // empty result for a non-empty listing as an internal error.
        (false, false) => Vec::new(),
    }
}

/// [`compute_range`] with [`DEFAULT_SIBLING_COUNT`].
pub fn compute_default_range(total_pages: usize, current_page: usize) -> Vec<RangeToken> {
    compute_range(total_pages, current_page, DEFAULT_SIBLING_COUNT)
}

/// Number of pages needed to show `total_items` at `page_size` per page.
///
/// An empty listing still has one (empty) page.
pub fn total_pages_for(total_items: usize, page_size: usize) -> PagerResult<usize> {
    if page_size == 0 {
        return Err(PagerError::InvalidPageSize);
    }
    Ok(total_items.div_ceil(page_size).max(1))
}

/// Render tokens as the labels a control displays.
pub fn render_labels(tokens: &[RangeToken]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}
