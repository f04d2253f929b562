use serde::{Deserialize, Serialize};

use crate::models::Property;

/// Sort key for search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Price,
    #[default]
    Date,
    Size,
    Popularity,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Price => "price",
            SortBy::Date => "date",
            SortBy::Size => "size",
            SortBy::Popularity => "popularity",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// One-based page selector
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

/// A page of results plus the pre-pagination match count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub properties: Vec<Property>,
    pub total: usize,
}

/// Order listings in place. The sort is stable, so equal keys keep their
/// original insertion order.
pub fn sort_properties(properties: &mut [Property], sort_by: SortBy, order: SortOrder) {
    properties.sort_by(|a, b| {
        let ordering = match sort_by {
            SortBy::Price => a.price.amount.cmp(&b.price.amount),
            SortBy::Date => {
                let ka = a.published_at.unwrap_or(a.created_at);
                let kb = b.published_at.unwrap_or(b.created_at);
                ka.cmp(&kb)
            }
            SortBy::Size => a.square_feet.cmp(&b.square_feet),
            SortBy::Popularity => a.counters.views.cmp(&b.counters.views),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Slice out the requested page: items `[(page-1)*limit, page*limit)`.
/// Pages past the end come back empty.
pub fn paginate(properties: Vec<Property>, page: PageRequest) -> Vec<Property> {
    let limit = page.limit.max(1);
    let start = page.page.saturating_sub(1).saturating_mul(limit);
    properties.into_iter().skip(start).take(limit).collect()
}
