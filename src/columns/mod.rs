//! Columns module - table schema and cell content
//!
//! - `locale` - locale settings (language, hour cycle, time zone)
//! - `time_display` - the last-triggered display rule
//! - `schema` - column definitions and per-row cells

mod locale;
mod schema;
mod time_display;

pub use locale::{LocaleSettings, TimeFormat};
pub use schema::{
    build_columns, Cell, Column, ColumnKey, ColumnKind, ColumnSet, IconColor, LabelChip,
    SortDirection, DEFAULT_SCRIPT_ICON, RUNNING_SCRIPT_ICON,
};
pub use time_display::{format_last_triggered, format_short_date_time, relative_time};
