//! Application state and derived views
//!
//! State is explicit and owned by the caller; the derivation methods are pure
//! reads over it. Markers carry no identity across ingestion runs, so
//! favorites and filters key on the marker name.

use std::collections::{BTreeMap, HashSet};

use crate::app::models::MarkerRecord;

/// Explicit application state
///
/// `replace_markers` swaps in the result of a fresh ingestion run wholesale;
/// nothing is merged or diffed. Category and favorite selections survive the
/// swap because they key on values, not on marker instances.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Markers from the most recent ingestion run, newest first
    pub markers: Vec<MarkerRecord>,

    /// Category symbols currently selected; empty means "show all"
    pub active_categories: HashSet<String>,

    /// Free-text search over marker names and descriptions
    pub search_query: String,

    /// Names of markers the user has starred
    pub favorites: HashSet<String>,
}

impl AppState {
    /// Create empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all markers with the result of a fresh ingestion run
    pub fn replace_markers(&mut self, markers: Vec<MarkerRecord>) {
        self.markers = markers;
    }

    /// Toggle a category symbol in the active filter set
    pub fn toggle_category(&mut self, symbol: &str) {
        if !self.active_categories.remove(symbol) {
            self.active_categories.insert(symbol.to_string());
        }
    }

    /// Toggle a marker name in the favorites set
    pub fn toggle_favorite(&mut self, name: &str) {
        if !self.favorites.remove(name) {
            self.favorites.insert(name.to_string());
        }
    }

    /// Whether the named marker is starred
    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.contains(name)
    }

    /// Markers passing both the category filter and the search query
    ///
    /// An empty category set means no category filtering; an empty or
    /// whitespace query means no text filtering. The search is
    /// case-insensitive over name and description.
    pub fn filtered_markers(&self) -> Vec<&MarkerRecord> {
        let query = self.search_query.trim().to_lowercase();

        self.markers
            .iter()
            .filter(|marker| self.passes_category_filter(marker))
            .filter(|marker| {
                query.is_empty()
                    || marker.name.to_lowercase().contains(&query)
                    || marker.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Starred markers, in marker order
    pub fn favorite_markers(&self) -> Vec<&MarkerRecord> {
        self.markers
            .iter()
            .filter(|marker| self.favorites.contains(&marker.name))
            .collect()
    }

    /// Marker count per category symbol, for the filter UI badges
    ///
    /// Markers without a category tag are not counted.
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for marker in &self.markers {
            if let Some(tag) = &marker.category_tag {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    fn passes_category_filter(&self, marker: &MarkerRecord) -> bool {
        if self.active_categories.is_empty() {
            return true;
        }
        marker
            .category_tag
            .as_ref()
            .is_some_and(|tag| self.active_categories.contains(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::LngLat;

    fn marker(name: &str, description: &str, category: Option<&str>) -> MarkerRecord {
        MarkerRecord::new(
            name.to_string(),
            description.to_string(),
            LngLat::new(44.8, 41.7).unwrap(),
            "#".to_string(),
            1.0,
            category.map(str::to_string),
            None,
        )
        .unwrap()
    }

    fn sample_state() -> AppState {
        let mut state = AppState::new();
        state.replace_markers(vec![
            marker("ნარიყალა", "ციხე", Some("🗿")),
            marker("მტირალა", "ეროვნული პარკი", Some("🌲")),
            marker("კაფე ლეილა", "ყავა და ნამცხვარი", Some("☕")),
            marker("უცნობი", "", None),
        ]);
        state
    }

    #[test]
    fn test_no_filters_shows_everything() {
        let state = sample_state();
        assert_eq!(state.filtered_markers().len(), 4);
    }

    #[test]
    fn test_category_filter() {
        let mut state = sample_state();
        state.toggle_category("🗿");

        let visible = state.filtered_markers();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "ნარიყალა");
    }

    #[test]
    fn test_category_toggle_roundtrip() {
        let mut state = sample_state();
        state.toggle_category("☕");
        state.toggle_category("☕");
        assert_eq!(state.filtered_markers().len(), 4);
    }

    #[test]
    fn test_untagged_markers_hidden_when_filtering() {
        let mut state = sample_state();
        state.toggle_category("🗿");
        state.toggle_category("🌲");

        let names: Vec<_> = state.filtered_markers().iter().map(|m| &m.name).collect();
        assert!(!names.contains(&&"უცნობი".to_string()));
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let mut state = sample_state();
        state.search_query = "პარკი".to_string();

        let visible = state.filtered_markers();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "მტირალა");
    }

    #[test]
    fn test_search_and_category_compose() {
        let mut state = sample_state();
        state.toggle_category("☕");
        state.search_query = "ყავა".to_string();
        assert_eq!(state.filtered_markers().len(), 1);

        state.search_query = "ციხე".to_string();
        assert!(state.filtered_markers().is_empty());
    }

    #[test]
    fn test_favorites_survive_marker_replacement() {
        let mut state = sample_state();
        state.toggle_favorite("ნარიყალა");
        assert!(state.is_favorite("ნარიყალა"));

        state.replace_markers(vec![marker("ნარიყალა", "განახლებული", Some("🗿"))]);
        assert_eq!(state.favorite_markers().len(), 1);
    }

    #[test]
    fn test_favorite_toggle_roundtrip() {
        let mut state = sample_state();
        state.toggle_favorite("მტირალა");
        state.toggle_favorite("მტირალა");
        assert!(!state.is_favorite("მტირალა"));
        assert!(state.favorite_markers().is_empty());
    }

    #[test]
    fn test_category_counts() {
        let counts = sample_state().category_counts();
        assert_eq!(counts.get("🗿"), Some(&1));
        assert_eq!(counts.get("☕"), Some(&1));
        assert_eq!(counts.len(), 3);
    }
}
