//! Browse the resource catalog: the full listing pipeline plus the
//! option lists that feed the filter bar.

use crate::dataset::Dataset;
use crate::model::{Resource, ResourceKind, University};
use crate::query::{self, FieldFilter, PageMark, QueryState, ResourceSort, PAGE_SIZE};
use serde::Serialize;

/// Query-string keys the catalog recognizes.
pub const QUERY_KEYS: &[&str] = &[
    "search",
    "universidad",
    "carrera",
    "materia",
    "tipo",
    "orden",
    "pagina",
];

/// One page of the catalog plus everything a client needs to render the
/// filter bar and the pagination controls.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceListing {
    pub rows: Vec<Resource>,
    /// Matching records across all pages.
    pub total: usize,
    /// Effective page after clamping, 1-based.
    pub page: usize,
    pub total_pages: usize,
    pub window: Vec<PageMark>,
    pub sort: &'static str,
    pub universities: Vec<University>,
    pub careers: Vec<String>,
    pub subjects: Vec<String>,
    pub kinds: Vec<&'static str>,
}

/// Filter, search, sort, and paginate the catalog.
pub fn browse(data: &Dataset, state: &QueryState) -> ResourceListing {
    let filters = [
        FieldFilter::eq("universidad", state.get("universidad")),
        FieldFilter::eq("carrera", state.get("carrera")),
        FieldFilter::eq("materia", state.get("materia")),
        FieldFilter::eq("tipo", state.get("tipo")),
    ];
    let mut hits = query::select(&data.resources, &filters, state.search());
    let sort = ResourceSort::from_key(state.sort());
    query::sort_resources(&mut hits, sort);

    let paged = query::paginate(&hits, PAGE_SIZE, state.page());
    ResourceListing {
        total: hits.len(),
        rows: paged.items.into_iter().cloned().collect(),
        page: paged.page,
        total_pages: paged.total_pages,
        window: paged.window,
        sort: sort.key(),
        universities: data.universities.clone(),
        careers: data.careers.clone(),
        subjects: data.subjects.clone(),
        kinds: ResourceKind::ALL.iter().map(|k| k.as_str()).collect(),
    }
}
