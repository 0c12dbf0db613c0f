//! The list query pipeline: filter, then stable sort, then paginate
//!
//! Step order is fixed and significant. Sorting runs after filtering so page
//! boundaries are computed over the reduced set, and pagination always runs
//! last, so the reported totals reflect the filtered count rather than the
//! raw input length. The pipeline is a pure function of its inputs: no I/O,
//! no locks, no state between calls, safe to invoke concurrently and cheap
//! enough to re-run per keystroke (debouncing is the caller's concern, as is
//! resetting to page 1 when the filter or sort changes).

use serde::{Deserialize, Serialize};

use crate::core::Record;
use crate::query::filter::FilterDescriptor;
use crate::query::page::{paginate, PageRequest, PageResult, DEFAULT_PER_PAGE};
use crate::query::sort::SortDescriptor;

/// A complete list query: filter descriptor, sort descriptor, page request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: FilterDescriptor,

    #[serde(default)]
    pub sort: SortDescriptor,

    #[serde(default)]
    pub page: PageRequest,
}

impl ListQuery {
    pub fn new(filter: FilterDescriptor, sort: SortDescriptor, page: PageRequest) -> Self {
        Self { filter, sort, page }
    }

    /// Run the pipeline using the record type's own searchable fields
    pub fn run<R: Record>(&self, rows: &[R]) -> PageResult<R> {
        self.run_with_fields(rows, R::searchable_fields())
    }

    /// Run the pipeline with a caller-specified searchable-field subset.
    ///
    /// Console configuration can narrow (or widen) which string fields the
    /// free-text term scans without touching the record type.
    pub fn run_with_fields<R: Record>(&self, rows: &[R], searchable: &[&str]) -> PageResult<R> {
        let mut filtered: Vec<R> = rows
            .iter()
            .filter(|row| self.filter.matches(*row, searchable))
            .cloned()
            .collect();

        self.sort.apply(&mut filtered);

        paginate(filtered, self.page)
    }
}

/// The wire-shaped list descriptor the consoles produce.
///
/// This is what arrives from a query string or a fetch-layer call site:
///
/// ```text
/// ?page=2&per_page=10&q=grand&filter={"status":"active"}&sort=created_at:desc
/// ```
///
/// All parameters have defaults, and malformed `filter`/`sort` expressions
/// degrade to "no filter"/"no sort" rather than failing — the same
/// silently-sane posture the pipeline itself takes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListParams {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Free-text search term
    pub q: Option<String>,

    /// Exact-match filters as a JSON object string,
    /// e.g. `{"status": "active", "floor": 2}`
    pub filter: Option<String>,

    /// Sort expression: `field:asc`, `field:desc`, or bare `field`
    pub sort: Option<String>,
}

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            q: None,
            filter: None,
            sort: None,
        }
    }
}

impl ListParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get page size, ensuring minimum of 1
    pub fn per_page(&self) -> usize {
        self.per_page.max(1)
    }

    /// Build the filter descriptor: search term plus parsed exact clauses
    pub fn filter_descriptor(&self) -> FilterDescriptor {
        let mut descriptor = FilterDescriptor::none();
        descriptor.search = self.q.clone();

        if let Some(raw) = self.filter.as_deref() {
            if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(raw) {
                for (field, value) in map {
                    descriptor.exact.insert(field, value.into());
                }
            }
        }

        descriptor
    }

    /// Build the sort descriptor from the `field:dir` expression
    pub fn sort_descriptor(&self) -> SortDescriptor {
        match self.sort.as_deref() {
            Some(expr) => SortDescriptor::parse(expr),
            None => SortDescriptor::unsorted(),
        }
    }

    /// Lower the wire shape into a runnable [`ListQuery`]
    pub fn to_query(&self) -> ListQuery {
        ListQuery {
            filter: self.filter_descriptor(),
            sort: self.sort_descriptor(),
            page: PageRequest::new(self.page(), self.per_page()),
        }
    }
}
