//! Filter state types

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::memo::SameInput;

/// The filter panes of the picker, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterSource {
    FloorAreas,
    Devices,
    Entities,
    Labels,
    Categories,
    Blueprints,
}

impl FilterSource {
    pub const ALL: [FilterSource; 6] = [
        FilterSource::FloorAreas,
        FilterSource::Devices,
        FilterSource::Entities,
        FilterSource::Labels,
        FilterSource::Categories,
        FilterSource::Blueprints,
    ];

    /// Stable identifier of the pane
    pub fn id(&self) -> &'static str {
        match self {
            FilterSource::FloorAreas => "ha-filter-floor-areas",
            FilterSource::Devices => "ha-filter-devices",
            FilterSource::Entities => "ha-filter-entities",
            FilterSource::Labels => "ha-filter-labels",
            FilterSource::Categories => "ha-filter-categories",
            FilterSource::Blueprints => "ha-filter-blueprints",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.id() == id)
    }
}

/// What one filter pane reported.
///
/// `items: None` means the pane places no constraint through a precomputed
/// set; category and label panes report only `value` and are resolved
/// against the registry when filters are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterValue {
    pub value: Option<Vec<String>>,
    pub items: Option<HashSet<String>>,
}

impl FilterValue {
    /// A selection whose matches the pane already knows
    pub fn with_items<V, I>(value: V, items: I) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            value: Some(value.into_iter().map(Into::into).collect()),
            items: Some(items.into_iter().map(Into::into).collect()),
        }
    }

    /// A selection that must be resolved against the registry
    pub fn selected<V>(value: V) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            value: Some(value.into_iter().map(Into::into).collect()),
            items: None,
        }
    }

    pub fn has_selection(&self) -> bool {
        self.value.as_ref().is_some_and(|v| !v.is_empty())
    }
}

/// Per-source filter state, iterated in `FilterSource` order.
pub type FilterState = BTreeMap<FilterSource, FilterValue>;

/// Result of applying all filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilteredScripts {
    /// No filter contributed a constraint: show everything
    #[default]
    NoFilter,
    /// Filters are active and nothing matched
    EmptyMatch,
    /// Entity ids that passed every active filter, sorted
    Matches(Arc<[String]>),
}

impl FilteredScripts {
    pub fn from_ids(mut ids: Vec<String>) -> Self {
        if ids.is_empty() {
            return FilteredScripts::EmptyMatch;
        }
        ids.sort();
        FilteredScripts::Matches(Arc::from(ids))
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, FilteredScripts::NoFilter)
    }

    pub fn ids(&self) -> Option<&[String]> {
        match self {
            FilteredScripts::Matches(ids) => Some(&ids[..]),
            _ => None,
        }
    }
}

impl SameInput for FilteredScripts {
    fn same_input(&self, other: &Self) -> bool {
        match (self, other) {
            (FilteredScripts::NoFilter, FilteredScripts::NoFilter) => true,
            (FilteredScripts::EmptyMatch, FilteredScripts::EmptyMatch) => true,
            (FilteredScripts::Matches(a), FilteredScripts::Matches(b)) => a.same_input(b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_ids_round_trip() {
        for source in FilterSource::ALL {
            assert_eq!(FilterSource::from_id(source.id()), Some(source));
        }
        assert_eq!(FilterSource::from_id("ha-filter-unknown"), None);
    }

    #[test]
    fn test_has_selection() {
        assert!(!FilterValue::default().has_selection());
        assert!(!FilterValue::selected(Vec::<String>::new()).has_selection());
        assert!(FilterValue::selected(["l1"]).has_selection());
    }

    #[test]
    fn test_from_ids_distinguishes_empty_match() {
        assert_eq!(FilteredScripts::from_ids(vec![]), FilteredScripts::EmptyMatch);
        let matches = FilteredScripts::from_ids(vec!["b".into(), "a".into()]);
        assert_eq!(matches.ids().unwrap(), &["a".to_string(), "b".to_string()]);
        assert!(matches.is_active());
        assert!(!FilteredScripts::NoFilter.is_active());
    }
}
