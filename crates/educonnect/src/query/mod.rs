//! The listing engine: filter, search, sort, and paginate collections.
//!
//! Every listing in the app is produced by the same pipeline over an
//! in-memory slice:
//!
//! 1. [`apply_filters`] keeps records matching all active field filters,
//! 2. [`matches_term`] narrows by the free-text search term,
//! 3. the sort module reorders with a stable sort,
//! 4. [`paginate`] slices one page and computes the page window.
//!
//! [`QueryState`] carries the active values between invocations and
//! round-trips them through a query string.

mod filter;
mod paginate;
mod search;
mod sort;
mod state;

pub use filter::{apply_filters, FieldFilter, FieldValue, FilterOp, Filterable};
pub use paginate::{page_window, paginate, PageMark, Paged, PAGE_SIZE};
pub use search::{matches_term, Searchable};
pub use sort::{sort_posts, sort_resources, ForumSort, ResourceSort};
pub use state::{QueryState, PAGE_KEY, SEARCH_KEY, SORT_KEY};

/// Filter then search: the shared front half of every listing pipeline.
/// Order within `records` is preserved, so a later stable sort sees the
/// original relative order.
pub fn select<'a, T>(records: &'a [T], filters: &[FieldFilter], term: &str) -> Vec<&'a T>
where
    T: Filterable + Searchable,
{
    apply_filters(records, filters)
        .into_iter()
        .filter(|r| matches_term(*r, term))
        .collect()
}
