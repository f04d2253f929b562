pub mod filters;
pub mod score;
pub mod sort;

pub use filters::PropertyFilters;
pub use score::{match_score, ClientPreferences};
pub use sort::{paginate, sort_properties, PageRequest, SearchResult, SortBy, SortOrder};

use serde::{Deserialize, Serialize};

use crate::models::Property;

/// A complete search request: filters plus ordering plus page selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub filters: PropertyFilters,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub page: PageRequest,
}

/// Run the full filter/sort/paginate pipeline over a collection in memory.
/// This is the mock-path equivalent of the backend's search endpoint.
pub fn run_search(properties: &[Property], query: &SearchQuery) -> SearchResult {
    let mut matched: Vec<Property> = properties
        .iter()
        .filter(|p| query.filters.matches(p))
        .cloned()
        .collect();
    sort_properties(&mut matched, query.sort_by, query.sort_order);
    let total = matched.len();
    SearchResult {
        properties: paginate(matched, query.page),
        total,
    }
}
