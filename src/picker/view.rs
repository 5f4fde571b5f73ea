//! What one render of the picker hands to the table widget

use std::sync::Arc;

use crate::columns::{Cell, ColumnKey, ColumnSet};
use crate::filters::FilterSource;
use crate::scripts::ScriptItem;

/// Where the table's back arrow leads
pub const BACK_PATH: &str = "/config";
/// Row field used as the row id
pub const ROW_ID_FIELD: &str = "entity_id";
/// Icon of the empty-state placeholder
pub const EMPTY_STATE_ICON: &str = "mdi:script-text";

/// One filter pane in the side panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPane {
    pub source: FilterSource,
    /// Currently selected option ids
    pub value: Option<Vec<String>>,
    pub expanded: bool,
    pub narrow: bool,
}

/// Placeholder shown when there are no scripts at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub header: String,
    pub text: String,
    pub learn_more_label: String,
    pub learn_more_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Entity id of the script
    pub id: String,
    pub cells: Vec<(ColumnKey, Cell)>,
}

/// Rendered table: schema, rows and the surrounding chrome
#[derive(Debug, Clone)]
pub struct TableView {
    pub columns: Arc<ColumnSet>,
    pub items: Arc<Vec<ScriptItem>>,
    pub rows: Vec<TableRow>,
    pub narrow: bool,
    pub back_path: &'static str,
    pub initial_group_column: ColumnKey,
    pub id_field: &'static str,
    pub clickable: bool,
    /// Number of filter panes with a non-empty selection
    pub active_filter_count: usize,
    pub filter_panes: Vec<FilterPane>,
    /// Set only when the script list itself is empty
    pub empty: Option<EmptyState>,
    /// Shown when filters leave no rows
    pub no_data_text: String,
    pub help_label: String,
    pub fab_label: String,
}

impl TableView {
    pub fn row(&self, entity_id: &str) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.id == entity_id)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
