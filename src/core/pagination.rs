//! Page-number sequences for pagination controls.
//!
//! Short ranges are shown in full; longer ones collapse into runs separated
//! by an ellipsis so the control never exceeds seven entries.

use crate::core::models::PaginationToken::{self, Ellipsis, Page};
use crate::error::{DashfmtError, Result};

/// Ranges up to this many pages are listed without collapsing.
pub const MAX_UNCOLLAPSED_PAGES: u32 = 7;

/// Build the token sequence for `current_page` of `total_pages`.
///
/// Rules, first match wins:
/// 1. `total_pages <= 7`: every page.
/// 2. `current_page <= 3`: first three, ellipsis, last two.
/// 3. `current_page >= total_pages - 2`: first two, ellipsis, last three.
/// 4. Otherwise: first page, ellipsis, the current page with one neighbour on
///    each side, ellipsis, last page.
///
/// Arguments are not validated. Out-of-range input still yields a
/// well-formed sequence; use [`PaginationRequest::new`] for checked input.
///
/// ```
/// use dashfmt::core::pagination::generate_pagination;
///
/// let tokens: Vec<String> = generate_pagination(5, 10)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(tokens, ["1", "...", "4", "5", "6", "...", "10"]);
/// ```
#[must_use]
pub fn generate_pagination(current_page: u32, total_pages: u32) -> Vec<PaginationToken> {
    if total_pages <= MAX_UNCOLLAPSED_PAGES {
        tracing::trace!(current_page, total_pages, "Listing all pages");
        return (1..=total_pages).map(Page).collect();
    }

    // total_pages > 7 from here on, so the subtractions below cannot underflow
    if current_page <= 3 {
        tracing::trace!(current_page, total_pages, "Current page near start");
        return vec![
            Page(1),
            Page(2),
            Page(3),
            Ellipsis,
            Page(total_pages - 1),
            Page(total_pages),
        ];
    }

    if current_page >= total_pages - 2 {
        tracing::trace!(current_page, total_pages, "Current page near end");
        return vec![
            Page(1),
            Page(2),
            Ellipsis,
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ];
    }

    // 3 < current_page < total_pages - 2
    tracing::trace!(current_page, total_pages, "Current page in the middle");
    vec![
        Page(1),
        Ellipsis,
        Page(current_page - 1),
        Page(current_page),
        Page(current_page + 1),
        Ellipsis,
        Page(total_pages),
    ]
}

/// A validated pagination request.
///
/// Guarantees `1 <= current_page <= total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationRequest {
    current_page: u32,
    total_pages: u32,
}

impl PaginationRequest {
    /// Check the page numbers and build a request.
    ///
    /// # Errors
    ///
    /// Returns [`DashfmtError::InvalidPage`] if either number is zero or the
    /// current page is past the last page.
    pub fn new(current_page: u32, total_pages: u32) -> Result<Self> {
        let reason = if total_pages == 0 {
            Some("total pages must be at least 1")
        } else if current_page == 0 {
            Some("current page must be at least 1")
        } else if current_page > total_pages {
            Some("current page exceeds total pages")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(DashfmtError::InvalidPage {
                current: current_page,
                total: total_pages,
                reason: reason.to_string(),
            });
        }

        Ok(Self {
            current_page,
            total_pages,
        })
    }

    /// The 1-based current page.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Token sequence for this request.
    #[must_use]
    pub fn tokens(&self) -> Vec<PaginationToken> {
        generate_pagination(self.current_page, self.total_pages)
    }
}
