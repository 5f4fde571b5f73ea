//! Action types and data structures
//!
//! Core types for the row overflow menu: RowAction, MenuItem and MenuEntry.

/// Actions available from a script row's overflow menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    ShowInfo,
    EditCategory,
    Run,
    ShowTrace,
    Duplicate,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 6] = [
        RowAction::ShowInfo,
        RowAction::EditCategory,
        RowAction::Run,
        RowAction::ShowTrace,
        RowAction::Duplicate,
        RowAction::Delete,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            RowAction::ShowInfo => "show_info",
            RowAction::EditCategory => "edit_category",
            RowAction::Run => "run",
            RowAction::ShowTrace => "show_trace",
            RowAction::Duplicate => "duplicate",
            RowAction::Delete => "delete",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}

/// One entry of the overflow menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub action: RowAction,
    pub label: String,
    /// Material Design icon name (e.g. "mdi:play")
    pub icon: &'static str,
    /// Destructive actions are rendered with a warning style
    pub warning: bool,
}

impl MenuItem {
    pub fn new(action: RowAction, label: impl Into<String>, icon: &'static str) -> Self {
        MenuItem {
            action,
            label: label.into(),
            icon,
            warning: false,
        }
    }

    pub fn with_warning(mut self) -> Self {
        self.warning = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Item(MenuItem),
    Divider,
}

impl MenuEntry {
    pub fn as_item(&self) -> Option<&MenuItem> {
        match self {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Divider => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_ids_round_trip() {
        for action in RowAction::ALL {
            assert_eq!(RowAction::from_id(action.id()), Some(action));
        }
        assert_eq!(RowAction::from_id("explode"), None);
    }

    #[test]
    fn test_menu_item_defaults() {
        let item = MenuItem::new(RowAction::Run, "Run", "mdi:play");
        assert!(!item.warning);
        assert!(item.clone().with_warning().warning);
        assert_eq!(MenuEntry::Item(item.clone()).as_item(), Some(&item));
        assert_eq!(MenuEntry::Divider.as_item(), None);
    }
}
