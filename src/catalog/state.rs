//! Filter/sort state for the vehicle table
//!
//! The state is owned by whoever renders the table (an admin screen, the
//! list endpoint) and mutated only through the named entry points here, so
//! the sort cycle and reset behavior are testable without a UI harness.

use super::vehicle::{SortConfig, SortDirection, SortField};
use serde::Serialize;

/// The sentinel category meaning "no type restriction"
pub const ALL_CATEGORIES: &str = "ALL";

/// Category restriction for the vehicle list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No restriction (the `ALL` sentinel)
    #[default]
    All,
    /// Keep only vehicles whose category equals this value exactly
    ///
    /// Categories are a controlled vocabulary; matching is case-sensitive.
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector value; the `ALL` sentinel and the empty string mean
    /// no restriction
    pub fn from_param(value: &str) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    /// Whether a record with this category passes the filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }

    /// The selector value this filter renders as
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(only) => only,
        }
    }
}

/// Search, category, and sort state for one view of the vehicle table
///
/// Created with defaults (no search, no category restriction, no sort),
/// mutated by user interaction, and discarded with the view. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    search_term: String,
    category: CategoryFilter,
    sort: Option<SortConfig>,
}

impl FilterState {
    /// State with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search text
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current category restriction
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Current sort, if any; `None` preserves the incoming snapshot order
    pub fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    /// Replace the search text
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Replace the category restriction
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Set or clear the sort outright (e.g. when restoring a saved view)
    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        self.sort = sort;
    }

    /// Cycle the sort for a column header click
    ///
    /// Each column cycles unsorted → ascending → descending → unsorted.
    /// Clicking a different column always restarts at ascending, discarding
    /// the previous column's position in the cycle.
    pub fn request_sort(&mut self, field: SortField) {
        self.sort = match self.sort {
            Some(current) if current.field == field => match current.direction {
                SortDirection::Ascending => Some(SortConfig {
                    field,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortConfig {
                field,
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Clear search, category, and sort in one state transition
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    /// Whether any search, category, or sort is active
    pub fn is_default(&self) -> bool {
        self == &FilterState::default()
    }
}
