//! Page request, page metadata, and slice pagination
//!
//! Pagination is total: a page size below 1 is corrected to 1 and a page
//! number outside `[1, total_pages]` is clamped to the nearest boundary
//! before slicing. An out-of-range request therefore returns the nearest
//! real page rather than silently producing an empty one.

use serde::{Deserialize, Serialize};

/// Which slice of the ordered, filtered record set to return
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    /// Page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub per_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Default page size the consoles render with
pub const DEFAULT_PER_PAGE: usize = 20;

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get page size, ensuring minimum of 1
    pub fn per_page(&self) -> usize {
        self.per_page.max(1)
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number, clamped into `[1, total_pages]`
    pub page: usize,

    /// Number of items per page
    pub per_page: usize,

    /// Total number of items (after filters)
    pub total_items: usize,

    /// Total number of pages, at least 1
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

/// Paginated result: one slice of the filtered, ordered record set
#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    /// The records on this page (at most `per_page` of them)
    pub items: Vec<T>,

    /// Pagination metadata
    pub meta: PageMeta,
}

/// Slice an ordered sequence into the requested page.
///
/// `total_pages = max(1, ceil(total_items / per_page))`, so an empty input
/// still reports one (empty) page and the clamped page number stays 1.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> PageResult<T> {
    let per_page = request.per_page();
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = request.page().min(total_pages);

    let start = (page - 1) * per_page;
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(per_page)
        .collect();

    PageResult {
        items,
        meta: PageMeta {
            page,
            per_page,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        },
    }
}
