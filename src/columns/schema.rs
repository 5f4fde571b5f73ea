//! Column schema of the script table
//!
//! `build_columns` describes the columns (titles, flags, widths) and
//! `ColumnSet::render_cell` produces the cell content for a row. The table
//! widget that lays these out is owned by the host.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::actions::{get_row_actions, MenuEntry};
use crate::i18n::Localize;
use crate::scripts::ScriptItem;

use super::locale::LocaleSettings;
use super::time_display::format_last_triggered;

const HEADERS: &str = "ui.panel.config.script.picker.headers";
const LAST_TRIGGERED: &str = "ui.card.automation.last_triggered";

/// Icon shown when the state carries no icon attribute
pub const DEFAULT_SCRIPT_ICON: &str = "mdi:script-text";
/// Icon of a script that is currently running
pub const RUNNING_SCRIPT_ICON: &str = "mdi:script-text-play";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Icon,
    Name,
    Category,
    Labels,
    LastTriggered,
    Actions,
}

impl ColumnKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKey::Icon => "icon",
            ColumnKey::Name => "name",
            ColumnKey::Category => "category",
            ColumnKey::Labels => "labels",
            ColumnKey::LastTriggered => "last_triggered",
            ColumnKey::Actions => "actions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Icon,
    Text,
    OverflowMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub key: ColumnKey,
    pub title: String,
    /// Accessible label for columns without a visible title
    pub label: Option<String>,
    pub kind: ColumnKind,
    pub main: bool,
    pub sortable: bool,
    pub filterable: bool,
    pub groupable: bool,
    pub hidden: bool,
    pub grows: bool,
    pub direction: Option<SortDirection>,
    pub width: Option<&'static str>,
}

impl Column {
    fn new(key: ColumnKey, title: impl Into<String>) -> Self {
        Column {
            key,
            title: title.into(),
            label: None,
            kind: ColumnKind::Text,
            main: false,
            sortable: false,
            filterable: false,
            groupable: false,
            hidden: false,
            grows: false,
            direction: None,
            width: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconColor {
    /// Error color, used for unavailable scripts
    Error,
    Unset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelChip {
    pub label_id: String,
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Icon {
        icon: String,
        color: IconColor,
    },
    Name {
        name: String,
        /// Narrow layout only: "Last triggered: ..."
        secondary: Option<String>,
        labels: Vec<LabelChip>,
    },
    Text(String),
    Menu(Vec<MenuEntry>),
}

/// The column schema plus what cell rendering needs
pub struct ColumnSet {
    columns: Vec<Column>,
    narrow: bool,
    localize: Arc<dyn Localize>,
    locale: Arc<LocaleSettings>,
    cutoff_days: i64,
}

impl std::fmt::Debug for ColumnSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnSet")
            .field("columns", &self.columns)
            .field("narrow", &self.narrow)
            .field("locale", &self.locale)
            .finish()
    }
}

/// Build the column schema for the given layout and locale
pub fn build_columns(
    narrow: bool,
    localize: Arc<dyn Localize>,
    locale: Arc<LocaleSettings>,
    cutoff_days: i64,
) -> ColumnSet {
    let header = |key: &str| localize.localize(&format!("{}.{}", HEADERS, key), &[]);

    let mut columns = Vec::with_capacity(6);

    let mut icon = Column::new(ColumnKey::Icon, "");
    icon.label = Some(header("state"));
    icon.kind = ColumnKind::Icon;
    columns.push(icon);

    let mut name = Column::new(ColumnKey::Name, header("name"));
    name.main = true;
    name.sortable = true;
    name.filterable = true;
    name.direction = Some(SortDirection::Asc);
    name.grows = true;
    columns.push(name);

    let mut category = Column::new(ColumnKey::Category, header("category"));
    category.hidden = true;
    category.groupable = true;
    category.filterable = true;
    category.sortable = true;
    columns.push(category);

    let mut labels = Column::new(ColumnKey::Labels, "");
    labels.hidden = true;
    labels.filterable = true;
    columns.push(labels);

    if !narrow {
        let mut last_triggered =
            Column::new(ColumnKey::LastTriggered, localize.localize(LAST_TRIGGERED, &[]));
        last_triggered.sortable = true;
        last_triggered.width = Some("40%");
        columns.push(last_triggered);
    }

    let mut actions = Column::new(ColumnKey::Actions, "");
    actions.kind = ColumnKind::OverflowMenu;
    actions.width = Some("64px");
    columns.push(actions);

    ColumnSet {
        columns,
        narrow,
        localize,
        locale,
        cutoff_days,
    }
}

impl ColumnSet {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get(&self, key: ColumnKey) -> Option<&Column> {
        self.columns.iter().find(|column| column.key == key)
    }

    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    fn last_triggered_text(&self, item: &ScriptItem, now: DateTime<Utc>) -> String {
        format_last_triggered(
            item.last_triggered,
            now,
            self.localize.as_ref(),
            &self.locale,
            self.cutoff_days,
        )
    }

    /// Cell content of `key` for one row
    pub fn render_cell(&self, key: ColumnKey, item: &ScriptItem, now: DateTime<Utc>) -> Cell {
        match key {
            ColumnKey::Icon => {
                let icon = match &item.entity.attributes.icon {
                    Some(icon) => icon.clone(),
                    None if item.entity.state == "on" => RUNNING_SCRIPT_ICON.to_string(),
                    None => DEFAULT_SCRIPT_ICON.to_string(),
                };
                let color = if item.is_unavailable() {
                    IconColor::Error
                } else {
                    IconColor::Unset
                };
                Cell::Icon { icon, color }
            }
            ColumnKey::Name => {
                let secondary = self.narrow.then(|| {
                    format!(
                        "{}: {}",
                        self.localize.localize(LAST_TRIGGERED, &[]),
                        self.last_triggered_text(item, now)
                    )
                });
                let labels = item
                    .labels
                    .iter()
                    .map(|label| LabelChip {
                        label_id: label.label_id.clone(),
                        name: label.name.clone(),
                        color: label.color.clone(),
                        icon: label.icon.clone(),
                    })
                    .collect();
                Cell::Name {
                    name: item.name.clone(),
                    secondary,
                    labels,
                }
            }
            ColumnKey::Category => Cell::Text(item.category.clone().unwrap_or_default()),
            ColumnKey::Labels => Cell::Text(item.label_text()),
            ColumnKey::LastTriggered => Cell::Text(self.last_triggered_text(item, now)),
            ColumnKey::Actions => Cell::Menu(get_row_actions(item, self.localize.as_ref())),
        }
    }

    /// Cells of every column, in column order
    pub fn render_row(&self, item: &ScriptItem, now: DateTime<Utc>) -> Vec<(ColumnKey, Cell)> {
        self.columns
            .iter()
            .map(|column| (column.key, self.render_cell(column.key, item, now)))
            .collect()
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
