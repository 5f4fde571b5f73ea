//! script-picker - render the script table from a registry snapshot
//!
//! ```text
//! script-picker --snapshot home.json --label l1 --search lights
//! script-picker --snapshot home.json --action duplicate --target script.wake_up
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;

use script_picker::actions::RowAction;
use script_picker::columns::{Cell, ColumnKey};
use script_picker::config::{self, PickerConfig};
use script_picker::filters::{FilterSource, FilterValue};
use script_picker::host::{load_snapshot, SnapshotConnection, SnapshotHost};
use script_picker::logging;
use script_picker::scripts::{search_items, ScriptItem};
use script_picker::{ScriptPicker, TableView};

/// Render above this is logged as slow
const RENDER_THRESHOLD_MS: u64 = 16;

#[derive(Parser, Debug)]
#[command(version, about = "Script list of a home-automation dashboard, driven by a snapshot")]
struct Cli {
    /// Snapshot with scripts, entity registry, categories, labels and
    /// related-item answers.
    #[arg(long, value_name = "FILE")]
    snapshot: PathBuf,

    /// Config file. Defaults to $SCRIPT_PICKER_CONFIG or the user config dir.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Use the narrow (mobile) layout.
    #[arg(long, default_value_t = false)]
    narrow: bool,

    /// Only show scripts carrying one of these labels.
    #[arg(long = "label", value_name = "LABEL_ID")]
    labels: Vec<String>,

    /// Only show scripts in this category.
    #[arg(long, value_name = "CATEGORY_ID")]
    category: Option<String>,

    /// Deep link: only show scripts created from this blueprint.
    #[arg(long, value_name = "BLUEPRINT")]
    blueprint: Option<String>,

    /// Case-insensitive text search over name, category and labels.
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,

    /// Simulate a click on this row.
    #[arg(long, value_name = "ENTITY_ID")]
    click: Option<String>,

    /// Overflow-menu action to run on --target
    /// (show_info, edit_category, run, show_trace, duplicate, delete).
    #[arg(long, value_name = "ACTION", requires = "target")]
    action: Option<String>,

    #[arg(long, value_name = "ENTITY_ID")]
    target: Option<String>,

    /// Answer confirmation dialogs with yes.
    #[arg(long, short = 'y', default_value_t = false)]
    yes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init();

    let config = match &cli.config {
        Some(path) => config::read_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => config::load_config(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("building runtime")?;
    runtime.block_on(run(cli, config))
}

async fn run(cli: Cli, config: PickerConfig) -> Result<()> {
    let action = match &cli.action {
        Some(id) => match RowAction::from_id(id) {
            Some(action) => Some(action),
            None => bail!("unknown action '{}'", id),
        },
        None => None,
    };

    let snapshot = load_snapshot(&cli.snapshot)
        .with_context(|| format!("loading snapshot {}", cli.snapshot.display()))?;
    info!(
        event_type = "app_lifecycle",
        action = "snapshot_loaded",
        scripts = snapshot.scripts.len(),
        "Snapshot loaded"
    );

    let host = Arc::new(SnapshotHost::new(snapshot.clone(), config.clone()).with_assume_yes(cli.yes));
    let connection = SnapshotConnection::new(&snapshot);

    let mut picker = ScriptPicker::new(host.collaborators(), config);
    if cli.narrow {
        picker.set_narrow(true);
    }
    picker.set_scripts(snapshot.scripts);
    picker.set_entity_registry(snapshot.entity_registry);
    picker.connect(&connection);

    if let Some(blueprint) = &cli.blueprint {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("blueprint", blueprint)
            .finish();
        picker.set_query(&query);
    }
    picker.first_updated().await;

    if !cli.labels.is_empty() {
        picker.filter_changed(FilterSource::Labels, FilterValue::selected(cli.labels.clone()));
    }
    if let Some(category) = &cli.category {
        picker.filter_changed(FilterSource::Categories, FilterValue::selected([category]));
    }

    let started = Instant::now();
    let view = picker.render(Utc::now());
    logging::log_perf(
        "render",
        started.elapsed().as_millis() as u64,
        RENDER_THRESHOLD_MS,
    );

    let shown: Vec<&ScriptItem> = match &cli.search {
        Some(query) => search_items(&view.items, query),
        None => view.items.iter().collect(),
    };
    print_table(&view, &shown);

    if let Some(entity_id) = &cli.click {
        picker.row_clicked(entity_id);
    }

    if let (Some(action), Some(target)) = (action, &cli.target) {
        let item = view
            .items
            .iter()
            .find(|item| item.entity_id() == target)
            .with_context(|| format!("no script '{}' in the current view", target))?;
        picker.dispatch(action, item).await;
    }

    for effect in host.take_effects() {
        println!("> {}", effect);
    }

    picker.disconnect();
    Ok(())
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Name {
            secondary: Some(secondary),
            ..
        } => secondary.clone(),
        _ => String::new(),
    }
}

fn print_table(view: &TableView, items: &[&ScriptItem]) {
    if let Some(empty) = &view.empty {
        println!("{}", empty.header);
        println!("{}", empty.text);
        println!("{}: {}", empty.learn_more_label, empty.learn_more_url);
        return;
    }
    if items.is_empty() {
        println!("{}", view.no_data_text);
        return;
    }

    // narrow layout carries the last-triggered text on the name cell
    let time_column = if view.narrow {
        ColumnKey::Name
    } else {
        ColumnKey::LastTriggered
    };

    for item in items {
        let last_triggered = view
            .row(item.entity_id())
            .and_then(|row| row.cells.iter().find(|(key, _)| *key == time_column))
            .map(|(_, cell)| cell_text(cell))
            .unwrap_or_default();
        println!(
            "{}\t{}\t{}\t{}\t{}",
            item.entity_id(),
            item.name,
            item.category.as_deref().unwrap_or("-"),
            item.label_text(),
            last_triggered
        );
    }

    if view.active_filter_count > 0 {
        println!("({} filter(s) active)", view.active_filter_count);
    }
}
