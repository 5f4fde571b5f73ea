//! Picker state: props, registry feeds, filter panes and rendering

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::{debug, info, instrument};

use crate::columns::{build_columns, ColumnKey, ColumnSet, LocaleSettings};
use crate::config::{PickerConfig, SCRIPT_EDITOR_DOCS_PATH};
use crate::error::ResultExt;
use crate::filters::{apply_filters, FilterSource, FilterState, FilterValue, FilteredScripts};
use crate::host::Collaborators;
use crate::i18n::{BundledLocalizer, Localize};
use crate::memo::MemoizeOne;
use crate::registry::{
    CategoryRegistryEntry, EntityRegistryEntry, LabelRegistryEntry, RegistryConnection,
    RegistrySlot, ScriptEntity, Subscription,
};
use crate::scripts::{build_script_items, ScriptItem};

use super::view::{
    EmptyState, FilterPane, TableRow, TableView, BACK_PATH, EMPTY_STATE_ICON, ROW_ID_FIELD,
};
use super::{BLUEPRINT_KIND, BLUEPRINT_PARAM, SCOPE};

pub(super) const PICKER: &str = "ui.panel.config.script.picker";
pub(super) const EDITOR: &str = "ui.panel.config.script.editor";

type ItemsKey = (
    Arc<[ScriptEntity]>,
    Arc<[EntityRegistryEntry]>,
    Option<Arc<[CategoryRegistryEntry]>>,
    Option<Arc<[LabelRegistryEntry]>>,
    FilteredScripts,
);

type ColumnsKey = (bool, Arc<dyn Localize>, Arc<LocaleSettings>);

/// The script list component.
///
/// Inputs are replaced wholesale (`set_scripts`, registry pushes); rows and
/// columns are derived lazily and cached until one of their inputs changes
/// identity.
pub struct ScriptPicker {
    pub(super) scripts: Arc<[ScriptEntity]>,
    pub(super) entity_registry: Arc<[EntityRegistryEntry]>,
    pub(super) narrow: bool,
    categories: RegistrySlot<CategoryRegistryEntry>,
    labels: RegistrySlot<LabelRegistryEntry>,
    subscriptions: Vec<Subscription>,
    filters: FilterState,
    filtered: FilteredScripts,
    expanded_filter: Option<FilterSource>,
    blueprint_param: Option<String>,
    items_memo: Mutex<MemoizeOne<ItemsKey, Vec<ScriptItem>>>,
    columns_memo: Mutex<MemoizeOne<ColumnsKey, ColumnSet>>,
    pub(super) localize: Arc<dyn Localize>,
    locale: Arc<LocaleSettings>,
    pub(super) config: PickerConfig,
    pub(super) collaborators: Collaborators,
}

impl ScriptPicker {
    /// Create a picker using the bundled translations for the configured
    /// language.
    pub fn new(collaborators: Collaborators, config: PickerConfig) -> Self {
        let locale = config.get_locale();
        let localize: Arc<dyn Localize> = Arc::new(BundledLocalizer::new(locale.language.clone()));
        Self {
            scripts: Arc::from(Vec::new()),
            entity_registry: Arc::from(Vec::new()),
            narrow: config.get_narrow(),
            categories: RegistrySlot::new("categories"),
            labels: RegistrySlot::new("labels"),
            subscriptions: Vec::new(),
            filters: FilterState::new(),
            filtered: FilteredScripts::NoFilter,
            expanded_filter: None,
            blueprint_param: None,
            items_memo: Mutex::new(MemoizeOne::new()),
            columns_memo: Mutex::new(MemoizeOne::new()),
            localize,
            locale: Arc::new(locale),
            config,
            collaborators,
        }
    }

    pub fn with_localizer(mut self, localize: Arc<dyn Localize>) -> Self {
        self.localize = localize;
        self
    }

    // --- props ---

    /// Replace the script list. Active filters are re-evaluated against it.
    pub fn set_scripts(&mut self, scripts: impl Into<Arc<[ScriptEntity]>>) {
        self.scripts = scripts.into();
        self.recompute_filters();
    }

    pub fn set_entity_registry(&mut self, registry: impl Into<Arc<[EntityRegistryEntry]>>) {
        self.entity_registry = registry.into();
        self.recompute_filters();
    }

    pub fn set_narrow(&mut self, narrow: bool) {
        self.narrow = narrow;
    }

    pub fn set_localizer(&mut self, localize: Arc<dyn Localize>) {
        self.localize = localize;
    }

    pub fn set_locale(&mut self, locale: LocaleSettings) {
        self.locale = Arc::new(locale);
    }

    /// Take deep-link parameters from a URL query string
    /// (`?blueprint=<id>`). Used by `first_updated`.
    pub fn set_query(&mut self, query: &str) {
        self.blueprint_param = url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .find(|(key, _)| key == BLUEPRINT_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());
    }

    pub fn scripts(&self) -> &[ScriptEntity] {
        &self.scripts
    }

    pub fn entity_registry(&self) -> &[EntityRegistryEntry] {
        &self.entity_registry
    }

    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    // --- registry feeds ---

    /// Subscribe to the category ("script" scope) and label feeds.
    /// Existing subscriptions are torn down first.
    pub fn connect(&mut self, connection: &dyn RegistryConnection) {
        self.disconnect();
        self.subscriptions = vec![
            connection.subscribe_categories(SCOPE, self.categories.callback()),
            connection.subscribe_labels(self.labels.callback()),
        ];
        info!(
            event_type = "picker_lifecycle",
            action = "connected",
            "Registry feeds subscribed"
        );
    }

    /// Tear down the registry feeds. Pushes that arrive afterwards are
    /// ignored; the last received registries stay in place.
    pub fn disconnect(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        self.categories.close();
        self.labels.close();
        self.subscriptions.clear();
        info!(
            event_type = "picker_lifecycle",
            action = "disconnected",
            "Registry feeds closed"
        );
    }

    pub fn is_connected(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn categories(&self) -> Option<Arc<[CategoryRegistryEntry]>> {
        self.categories.get()
    }

    pub fn labels(&self) -> Option<Arc<[LabelRegistryEntry]>> {
        self.labels.get()
    }

    // --- derived data ---

    /// Display rows. Recomputed only when scripts, entity registry,
    /// category/label registries or the filter result changed identity.
    pub fn items(&self) -> Arc<Vec<ScriptItem>> {
        let key: ItemsKey = (
            Arc::clone(&self.scripts),
            Arc::clone(&self.entity_registry),
            self.categories.get(),
            self.labels.get(),
            self.filtered.clone(),
        );
        self.items_memo
            .lock()
            .get_or_compute(key, |(scripts, registry, categories, labels, filtered)| {
                build_script_items(
                    scripts,
                    registry,
                    categories.as_deref(),
                    labels.as_deref(),
                    filtered,
                )
            })
    }

    /// Column schema. Recomputed only when the layout, localizer or locale
    /// changed.
    pub fn columns(&self) -> Arc<ColumnSet> {
        let key: ColumnsKey = (
            self.narrow,
            Arc::clone(&self.localize),
            Arc::clone(&self.locale),
        );
        let cutoff_days = self.config.get_relative_time_cutoff_days();
        self.columns_memo
            .lock()
            .get_or_compute(key, |(narrow, localize, locale)| {
                build_columns(*narrow, Arc::clone(localize), Arc::clone(locale), cutoff_days)
            })
    }

    // --- filters ---

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filtered(&self) -> &FilteredScripts {
        &self.filtered
    }

    pub fn expanded_filter(&self) -> Option<FilterSource> {
        self.expanded_filter
    }

    /// Number of filter panes with a non-empty selection
    pub fn active_filter_count(&self) -> usize {
        self.filters
            .values()
            .filter(|filter| filter.has_selection())
            .count()
    }

    /// A filter pane reported a new selection
    pub fn filter_changed(&mut self, source: FilterSource, value: FilterValue) {
        debug!(source = source.id(), "Filter changed");
        self.filters.insert(source, value);
        self.recompute_filters();
    }

    pub fn clear_filter(&mut self) {
        debug!("Filters cleared");
        self.filters.clear();
        self.recompute_filters();
    }

    /// A label chip on a row was clicked: the label filter becomes exactly
    /// that label.
    pub fn label_clicked(&mut self, label_id: &str) {
        info!(
            event_type = "picker_action",
            action = "label_clicked",
            label_id = label_id,
            "Filtering by label"
        );
        self.filters
            .insert(FilterSource::Labels, FilterValue::selected([label_id]));
        self.recompute_filters();
    }

    /// Expanding a pane collapses any other. Collapsing only has an effect
    /// on the pane that is currently expanded.
    pub fn filter_expanded(&mut self, source: FilterSource, expanded: bool) {
        if expanded {
            self.expanded_filter = Some(source);
        } else if self.expanded_filter == Some(source) {
            self.expanded_filter = None;
        }
    }

    /// First render: seed the blueprint filter from the deep link, if any.
    pub async fn first_updated(&mut self) {
        if let Some(blueprint) = self.blueprint_param.clone() {
            self.filter_blueprint(&blueprint).await;
        }
    }

    /// Restrict the list to scripts created from `blueprint`.
    ///
    /// Reads the `"script"` kind of the related-items answer for the
    /// `script_blueprint` item. A failed lookup leaves the filters untouched.
    #[instrument(skip(self))]
    pub async fn filter_blueprint(&mut self, blueprint: &str) {
        let search = Arc::clone(&self.collaborators.search);
        let Some(related) = search
            .find_related(BLUEPRINT_KIND, blueprint)
            .await
            .warn_on_err()
        else {
            return;
        };

        let items = related.get(SCOPE).cloned().unwrap_or_default();
        info!(
            event_type = "picker_action",
            action = "blueprint_filter",
            blueprint = blueprint,
            matches = items.len(),
            "Blueprint filter applied"
        );
        self.filters.insert(
            FilterSource::Blueprints,
            FilterValue::with_items([blueprint], items),
        );
        self.recompute_filters();
    }

    fn recompute_filters(&mut self) {
        self.filtered = apply_filters(&self.filters, &self.scripts, &self.entity_registry);
    }

    // --- rendering ---

    pub(super) fn text(&self, key: &str) -> String {
        self.localize.localize(key, &[])
    }

    pub(super) fn picker_text(&self, key: &str) -> String {
        self.text(&format!("{}.{}", PICKER, key))
    }

    fn filter_panes(&self) -> Vec<FilterPane> {
        FilterSource::ALL
            .into_iter()
            .map(|source| FilterPane {
                source,
                value: self
                    .filters
                    .get(&source)
                    .and_then(|filter| filter.value.clone()),
                expanded: self.expanded_filter == Some(source),
                narrow: self.narrow,
            })
            .collect()
    }

    fn empty_state(&self) -> Option<EmptyState> {
        if !self.scripts.is_empty() {
            return None;
        }
        Some(EmptyState {
            icon: EMPTY_STATE_ICON,
            header: self.picker_text("empty_header"),
            text: self.picker_text("empty_text"),
            learn_more_label: self.text("ui.panel.config.common.learn_more"),
            learn_more_url: self.config.documentation_url(SCRIPT_EDITOR_DOCS_PATH),
        })
    }

    /// Render the table as of `now` (used for relative times)
    pub fn render(&self, now: DateTime<Utc>) -> TableView {
        let columns = self.columns();
        let items = self.items();
        let rows = items
            .iter()
            .map(|item| TableRow {
                id: item.entity_id().to_string(),
                cells: columns.render_row(item, now),
            })
            .collect();

        TableView {
            columns,
            items,
            rows,
            narrow: self.narrow,
            back_path: BACK_PATH,
            initial_group_column: ColumnKey::Category,
            id_field: ROW_ID_FIELD,
            clickable: true,
            active_filter_count: self.active_filter_count(),
            filter_panes: self.filter_panes(),
            empty: self.empty_state(),
            no_data_text: self.picker_text("no_scripts"),
            help_label: self.text("ui.common.help"),
            fab_label: self.picker_text("add_script"),
        }
    }
}

impl Drop for ScriptPicker {
    fn drop(&mut self) {
        self.disconnect();
    }
}
