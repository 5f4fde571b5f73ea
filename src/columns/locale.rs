//! Locale settings used for date/time display

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Hour cycle preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// Follow the language's convention
    #[default]
    #[serde(rename = "language")]
    Language,
    #[serde(rename = "system")]
    System,
    #[serde(rename = "12")]
    TwelveHour,
    #[serde(rename = "24")]
    TwentyFourHour,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    pub language: String,
    pub time_format: TimeFormat,
    /// Offset of the display time zone from UTC
    pub utc_offset_minutes: i32,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            time_format: TimeFormat::Language,
            utc_offset_minutes: 0,
        }
    }
}

fn language_uses_twelve_hour(language: &str) -> bool {
    let lang = language.to_ascii_lowercase();
    if lang == "en-gb" || lang == "en-ie" {
        return false;
    }
    let primary = lang.split(['-', '_']).next().unwrap_or_default();
    matches!(primary, "en" | "hi" | "ko" | "ar" | "bn")
}

impl LocaleSettings {
    pub fn uses_twelve_hour(&self) -> bool {
        match self.time_format {
            TimeFormat::TwelveHour => true,
            TimeFormat::TwentyFourHour => false,
            TimeFormat::Language | TimeFormat::System => language_uses_twelve_hour(&self.language),
        }
    }

    /// Display time zone; out-of-range offsets fall back to UTC
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| Utc.fix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_cycle() {
        let mut locale = LocaleSettings::default();
        assert!(locale.uses_twelve_hour());
        locale.language = "de".to_string();
        assert!(!locale.uses_twelve_hour());
        locale.language = "en-GB".to_string();
        assert!(!locale.uses_twelve_hour());
        locale.time_format = TimeFormat::TwelveHour;
        assert!(locale.uses_twelve_hour());
    }

    #[test]
    fn test_time_format_serde_names() {
        let locale: LocaleSettings =
            serde_json::from_str(r#"{"language":"nl","time_format":"24"}"#).unwrap();
        assert_eq!(locale.time_format, TimeFormat::TwentyFourHour);
        assert_eq!(locale.utc_offset_minutes, 0);
    }

    #[test]
    fn test_invalid_offset_falls_back_to_utc() {
        let locale = LocaleSettings {
            utc_offset_minutes: 100_000,
            ..LocaleSettings::default()
        };
        assert_eq!(locale.offset().local_minus_utc(), 0);
    }
}
