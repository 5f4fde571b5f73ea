use super::*;
use crate::actions::RowAction;
use crate::config::DEFAULT_RELATIVE_TIME_CUTOFF_DAYS;
use crate::i18n::BundledLocalizer;
use crate::registry::{LabelRegistryEntry, ScriptEntity};
use chrono::{Duration, TimeZone};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

fn columns(narrow: bool) -> ColumnSet {
    build_columns(
        narrow,
        Arc::new(BundledLocalizer::default()),
        Arc::new(LocaleSettings::default()),
        DEFAULT_RELATIVE_TIME_CUTOFF_DAYS,
    )
}

fn item(state: &str, last_triggered: Option<DateTime<Utc>>) -> ScriptItem {
    ScriptItem {
        entity: ScriptEntity::new("script.wake_up", state),
        name: "Wake up".to_string(),
        last_triggered,
        category: Some("Morning".to_string()),
        labels: vec![
            LabelRegistryEntry::new("kids", "Kids"),
            LabelRegistryEntry::new("weekday", "Weekday"),
        ],
    }
}

fn keys(set: &ColumnSet) -> Vec<ColumnKey> {
    set.columns().iter().map(|c| c.key).collect()
}

#[test]
fn test_wide_layout_columns() {
    let set = columns(false);
    assert_eq!(
        keys(&set),
        vec![
            ColumnKey::Icon,
            ColumnKey::Name,
            ColumnKey::Category,
            ColumnKey::Labels,
            ColumnKey::LastTriggered,
            ColumnKey::Actions,
        ]
    );
    let last = set.get(ColumnKey::LastTriggered).unwrap();
    assert_eq!(last.title, "Last triggered");
    assert_eq!(last.width, Some("40%"));
    assert!(last.sortable);
}

#[test]
fn test_narrow_layout_omits_last_triggered() {
    let set = columns(true);
    assert!(set.get(ColumnKey::LastTriggered).is_none());
    assert_eq!(set.columns().len(), 5);
}

#[test]
fn test_column_flags() {
    let set = columns(false);
    let name = set.get(ColumnKey::Name).unwrap();
    assert!(name.main && name.sortable && name.filterable && name.grows);
    assert_eq!(name.direction, Some(SortDirection::Asc));
    assert_eq!(name.title, "Name");

    let category = set.get(ColumnKey::Category).unwrap();
    assert!(category.hidden && category.groupable && category.filterable && category.sortable);

    let labels = set.get(ColumnKey::Labels).unwrap();
    assert!(labels.hidden && labels.filterable && !labels.sortable);

    let icon = set.get(ColumnKey::Icon).unwrap();
    assert_eq!(icon.label.as_deref(), Some("State"));
    assert_eq!(icon.kind, ColumnKind::Icon);

    let actions = set.get(ColumnKey::Actions).unwrap();
    assert_eq!(actions.kind, ColumnKind::OverflowMenu);
    assert_eq!(actions.width, Some("64px"));
}

#[test]
fn test_unavailable_icon_is_red() {
    let set = columns(false);
    assert_eq!(
        set.render_cell(ColumnKey::Icon, &item("unavailable", None), now()),
        Cell::Icon {
            icon: DEFAULT_SCRIPT_ICON.to_string(),
            color: IconColor::Error
        }
    );
    assert_eq!(
        set.render_cell(ColumnKey::Icon, &item("on", None), now()),
        Cell::Icon {
            icon: RUNNING_SCRIPT_ICON.to_string(),
            color: IconColor::Unset
        }
    );
}

#[test]
fn test_name_cell_secondary_line_only_when_narrow() {
    let row = item("off", Some(now() - Duration::minutes(5)));

    match columns(true).render_cell(ColumnKey::Name, &row, now()) {
        Cell::Name {
            secondary, labels, ..
        } => {
            assert_eq!(secondary.as_deref(), Some("Last triggered: 5 minutes ago"));
            assert_eq!(labels.len(), 2);
            assert_eq!(labels[0].label_id, "kids");
        }
        other => panic!("unexpected cell {:?}", other),
    }

    match columns(false).render_cell(ColumnKey::Name, &row, now()) {
        Cell::Name { secondary, .. } => assert!(secondary.is_none()),
        other => panic!("unexpected cell {:?}", other),
    }
}

#[test]
fn test_text_cells() {
    let set = columns(false);
    let row = item("off", None);
    assert_eq!(
        set.render_cell(ColumnKey::Category, &row, now()),
        Cell::Text("Morning".to_string())
    );
    assert_eq!(
        set.render_cell(ColumnKey::Labels, &row, now()),
        Cell::Text("Kids Weekday".to_string())
    );
    assert_eq!(
        set.render_cell(ColumnKey::LastTriggered, &row, now()),
        Cell::Text("Never".to_string())
    );
}

#[test]
fn test_actions_cell_uses_edit_category_when_assigned() {
    let set = columns(false);
    let cell = set.render_cell(ColumnKey::Actions, &item("off", None), now());
    let Cell::Menu(entries) = cell else {
        panic!("expected menu");
    };
    let category = entries[1].as_item().unwrap();
    assert_eq!(category.action, RowAction::EditCategory);
    assert_eq!(category.label, "Edit category");
}

#[test]
fn test_render_row_follows_column_order() {
    let set = columns(true);
    let row = set.render_row(&item("off", None), now());
    let order: Vec<ColumnKey> = row.iter().map(|(k, _)| *k).collect();
    assert_eq!(order, keys(&set));
}
