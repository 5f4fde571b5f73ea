//! Last-triggered display
//!
//! Never triggered -> localized "never". Older than the cutoff (in whole
//! days) -> absolute short date/time. Otherwise a relative phrase such as
//! "5 minutes ago".

use chrono::{DateTime, Utc};

use crate::i18n::Localize;

use super::locale::LocaleSettings;

const RELATIVE: &str = "ui.components.relative_time";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    fn key(&self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }
}

fn rounded(seconds: i64, unit_seconds: f64) -> i64 {
    (seconds as f64 / unit_seconds).round() as i64
}

/// Pick the largest unit that keeps the value under its threshold
/// (45 s, 45 min, 22 h, 5 d, 4 w, 12 mo).
fn select_unit(seconds: i64) -> (i64, Unit) {
    if seconds.abs() < 45 {
        return (seconds, Unit::Second);
    }
    let minutes = rounded(seconds, 60.0);
    if minutes.abs() < 45 {
        return (minutes, Unit::Minute);
    }
    let hours = rounded(seconds, 3_600.0);
    if hours.abs() < 22 {
        return (hours, Unit::Hour);
    }
    let days = rounded(seconds, 86_400.0);
    if days.abs() < 5 {
        return (days, Unit::Day);
    }
    let weeks = rounded(seconds, 7.0 * 86_400.0);
    if weeks.abs() < 4 {
        return (weeks, Unit::Week);
    }
    let months = rounded(seconds, 30.0 * 86_400.0);
    if months.abs() < 12 {
        return (months, Unit::Month);
    }
    (rounded(seconds, 365.0 * 86_400.0), Unit::Year)
}

/// Relative phrase for `date` as seen from `now` ("5 minutes ago", "in 2 hours")
pub fn relative_time(date: DateTime<Utc>, now: DateTime<Utc>, localize: &dyn Localize) -> String {
    let (value, unit) = select_unit((date - now).num_seconds());
    if value == 0 {
        return localize.localize(&format!("{}.just_now", RELATIVE), &[]);
    }

    let count = value.abs().to_string();
    let plural = if value.abs() == 1 { "one" } else { "other" };
    let duration = localize.localize(
        &format!("{}.duration.{}.{}", RELATIVE, unit.key(), plural),
        &[("count", &count)],
    );
    let direction = if value < 0 { "past" } else { "future" };
    localize.localize(
        &format!("{}.{}", RELATIVE, direction),
        &[("duration", &duration)],
    )
}

/// Short absolute form: "Oct 8, 3:04 PM" or "Oct 8, 15:04"
pub fn format_short_date_time(date: DateTime<Utc>, locale: &LocaleSettings) -> String {
    let local = date.with_timezone(&locale.offset());
    let pattern = if locale.uses_twelve_hour() {
        "%b %-d, %-I:%M %p"
    } else {
        "%b %-d, %H:%M"
    };
    local.format(pattern).to_string()
}

/// Text for the last-triggered column and the narrow-mode secondary line
pub fn format_last_triggered(
    last_triggered: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    localize: &dyn Localize,
    locale: &LocaleSettings,
    cutoff_days: i64,
) -> String {
    match last_triggered {
        None => localize.localize(&format!("{}.never", RELATIVE), &[]),
        Some(date) if (now - date).num_days() > cutoff_days => {
            format_short_date_time(date, locale)
        }
        Some(date) => relative_time(date, now, localize),
    }
}
