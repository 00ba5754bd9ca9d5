//! The vehicle list query pipeline
//!
//! Pure functions from a snapshot of vehicle records plus a
//! [`FilterState`] to the ordered sequence a table displays. The pipeline
//! never mutates its input and has no side effects; calling it twice with
//! the same input yields the same output in the same order.
//!
//! The three stages run unconditionally in a fixed order on every call:
//!
//! 1. sort (stable; absent sort preserves snapshot order)
//! 2. category filter (exact match, `ALL` keeps everything)
//! 3. search (case-insensitive substring over brand, model, plate, trim)
//!
//! The order is part of the observable contract — reordering the stages
//! changes what a caller sees when inputs change between recomputations —
//! so it must not be "optimized" into filter-before-sort.

use super::state::{CategoryFilter, FilterState};
use super::vehicle::{SortDirection, Vehicle};
use indexmap::IndexSet;

/// Compute the displayed vehicle sequence for one view state
pub fn apply(snapshot: &[Vehicle], state: &FilterState) -> Vec<Vehicle> {
    let mut result: Vec<Vehicle> = snapshot.to_vec();

    // Stage 1: sort. slice::sort_by is stable, so equal keys keep their
    // relative snapshot order.
    if let Some(sort) = state.sort() {
        result.sort_by(|a, b| {
            let ordering = sort.field.compare(a, b);
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    // Stage 2: category filter.
    if let CategoryFilter::Only(_) = state.category() {
        result.retain(|vehicle| state.category().matches(&vehicle.category));
    }

    // Stage 3: search.
    if !state.search_term().is_empty() {
        let needle = state.search_term().to_lowercase();
        result.retain(|vehicle| matches_search(vehicle, &needle));
    }

    result
}

/// Whether a vehicle matches a lowercased search needle on any of the
/// searchable fields; an absent trim never matches
fn matches_search(vehicle: &Vehicle, needle: &str) -> bool {
    vehicle.brand.to_lowercase().contains(needle)
        || vehicle.model.to_lowercase().contains(needle)
        || vehicle.plate.to_lowercase().contains(needle)
        || vehicle
            .trim
            .as_deref()
            .is_some_and(|trim| trim.to_lowercase().contains(needle))
}

/// The category selector options for a snapshot
///
/// Derived from the full, unfiltered snapshot — never from the pipeline
/// output — so the selector always offers every category present in the
/// data, including ones the active filter currently hides. Categories
/// appear in first-observation order with the `ALL` sentinel prepended.
pub fn category_options(snapshot: &[Vehicle]) -> Vec<String> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    for vehicle in snapshot {
        seen.insert(vehicle.category.as_str());
    }

    let mut options = Vec::with_capacity(seen.len() + 1);
    options.push(super::state::ALL_CATEGORIES.to_string());
    options.extend(seen.into_iter().map(str::to_string));
    options
}
