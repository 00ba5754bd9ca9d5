//! List-query parameters and pagination utilities
//!
//! [`ListParams`] is extracted from the URL query string of list endpoints
//! and converted into a [`FilterState`](crate::catalog::FilterState) for the
//! query pipeline. All parameters have defaults.
//!
//! # Example
//! ```rust,ignore
//! // GET /api/vehicles?page=2&limit=10
//! // GET /api/vehicles?category=MOTOS&search=honda
//! // GET /api/vehicles?sort=price:desc
//! ```

use crate::catalog::{CategoryFilter, FilterState, SortConfig, SortDirection, SortField};
use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Query parameters for the vehicle list endpoint
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListParams {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Free-text search over brand, model, plate, and trim
    pub search: Option<String>,

    /// Category filter; the sentinel `ALL` (or omission) means no filter
    pub category: Option<String>,

    /// Sort expression: `field` or `field:asc` or `field:desc`
    ///
    /// Valid fields are the sortable table columns: `plate`, `brand`,
    /// `manufacture_year`, `category`, `price`.
    pub sort: Option<String>,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    20
}

impl ListParams {
    /// Page number, minimum 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Page size, clamped to 1..=100
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, 100)
    }

    /// Build the pipeline filter state these parameters describe
    ///
    /// Unknown sort fields or directions are rejected here, at the HTTP
    /// boundary; past this point sort fields are a closed enum.
    pub fn filter_state(&self) -> Result<FilterState, ValidationError> {
        let mut state = FilterState::new();

        if let Some(search) = &self.search {
            state.set_search_term(search.clone());
        }

        if let Some(category) = &self.category {
            state.set_category(CategoryFilter::from_param(category));
        }

        if let Some(sort) = &self.sort {
            state.set_sort(Some(parse_sort(sort)?));
        }

        Ok(state)
    }
}

/// Parse a `field[:direction]` sort expression
fn parse_sort(expr: &str) -> Result<SortConfig, ValidationError> {
    let (field, direction) = match expr.split_once(':') {
        Some((field, direction)) => (field, direction.parse::<SortDirection>()?),
        None => (expr, SortDirection::Ascending),
    };

    Ok(SortConfig {
        field: field.parse::<SortField>()?,
        direction,
    })
}

/// Paginated response wrapper
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The page of data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Compute pagination metadata
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1) * limit;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start + limit < total,
            has_prev: page > 1,
        }
    }
}
