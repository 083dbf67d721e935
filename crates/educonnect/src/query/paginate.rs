//! Fixed-size pagination with an ellipsis page window.
//!
//! The requested page is clamped into `[1, total_pages]` whenever the
//! filtered count changes, so narrowing a filter can never strand the
//! view on a page past the end. The window sequence (`1 2 … 8 9`) is a
//! fixed rule, not an approximation; renderers display it verbatim.

use serde::{Serialize, Serializer};

/// Catalog page size.
pub const PAGE_SIZE: usize = 9;

/// One entry of a pagination control: a page number or an ellipsis gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMark {
    Num(usize),
    Gap,
}

impl std::fmt::Display for PageMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageMark::Num(n) => write!(f, "{}", n),
            PageMark::Gap => f.write_str("…"),
        }
    }
}

// Serialized as a bare number or the ellipsis string, matching the shape
// pagination controls consume.
impl Serialize for PageMark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageMark::Num(n) => serializer.serialize_u64(*n as u64),
            PageMark::Gap => serializer.serialize_str("…"),
        }
    }
}

/// One page of a sliced collection plus everything a pagination control
/// needs to render itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    /// Effective page after clamping; may differ from the requested one.
    pub page: usize,
    pub total_pages: usize,
    pub window: Vec<PageMark>,
}

/// Slice `rows` into the requested 1-based page. `page_size` must be
/// non-zero. An empty input yields zero pages, an empty window, and an
/// effective page of 1.
pub fn paginate<T: Clone>(rows: &[T], page_size: usize, requested: usize) -> Paged<T> {
    let total_pages = if rows.is_empty() {
        0
    } else {
        rows.len().div_ceil(page_size)
    };
    let page = requested.clamp(1, total_pages.max(1));
    let start = (page - 1) * page_size;
    let items = if start < rows.len() {
        rows[start..(start + page_size).min(rows.len())].to_vec()
    } else {
        Vec::new()
    };
    Paged {
        items,
        page,
        total_pages,
        window: page_window(total_pages, page),
    }
}

/// The page-number display sequence for `total` pages with `current`
/// selected:
///
/// - `total <= 5`: every page.
/// - `current <= 3`: `[1, 2, 3, 4, …, total]`.
/// - `current >= total - 2`: `[1, …, total-3, total-2, total-1, total]`.
/// - otherwise: `[1, …, current-1, current, current+1, …, total]`.
pub fn page_window(total: usize, current: usize) -> Vec<PageMark> {
    use PageMark::{Gap, Num};

    if total == 0 {
        return Vec::new();
    }
    if total <= 5 {
        return (1..=total).map(Num).collect();
    }
    if current <= 3 {
        vec![Num(1), Num(2), Num(3), Num(4), Gap, Num(total)]
    } else if current >= total - 2 {
        vec![
            Num(1),
            Gap,
            Num(total - 3),
            Num(total - 2),
            Num(total - 1),
            Num(total),
        ]
    } else {
        vec![
            Num(1),
            Gap,
            Num(current - 1),
            Num(current),
            Num(current + 1),
            Gap,
            Num(total),
        ]
    }
}
