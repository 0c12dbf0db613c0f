//! The list query pipeline and its building blocks
//!
//! Composition order is fixed: filter ([`FilterDescriptor`]), then stable
//! sort ([`SortDescriptor`]), then pagination ([`paginate`]). [`ListQuery`]
//! composes the three; [`aggregate`] holds the summary math the consoles
//! derive alongside (never inside) the pipeline.

pub mod aggregate;
pub mod filter;
pub mod page;
pub mod pipeline;
pub mod sort;

pub use filter::FilterDescriptor;
pub use page::{paginate, PageMeta, PageRequest, PageResult, DEFAULT_PER_PAGE};
pub use pipeline::{ListParams, ListQuery};
pub use sort::{SortDescriptor, SortDirection};
