use super::*;
use crate::columns::TimeFormat;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = PickerConfig::default();
    assert_eq!(config.get_locale().language, "en");
    assert_eq!(
        config.get_documentation_base_url(),
        DEFAULT_DOCUMENTATION_BASE_URL
    );
    assert_eq!(
        config.get_relative_time_cutoff_days(),
        DEFAULT_RELATIVE_TIME_CUTOFF_DAYS
    );
    assert!(!config.get_narrow());
    assert!(!config.is_component_loaded("blueprint"));
}

#[test]
fn test_documentation_url_joins_without_double_slash() {
    let config = PickerConfig {
        documentation_base_url: Some("https://docs.example.org/".to_string()),
        ..PickerConfig::default()
    };
    assert_eq!(
        config.documentation_url(SCRIPTS_DOCS_PATH),
        "https://docs.example.org/docs/scripts/"
    );
}

#[test]
fn test_negative_cutoff_is_clamped() {
    let config = PickerConfig {
        relative_time_cutoff_days: Some(-2),
        ..PickerConfig::default()
    };
    assert_eq!(config.get_relative_time_cutoff_days(), 0);
}

#[test]
fn test_camel_case_fields() {
    let json = r#"{
        "locale": {"language": "de", "time_format": "24", "utc_offset_minutes": 60},
        "documentationBaseUrl": "https://rc.example.org",
        "relativeTimeCutoffDays": 7,
        "narrow": true,
        "loadedComponents": ["blueprint", "script"]
    }"#;
    let config: PickerConfig = serde_json::from_str(json).unwrap();
    let locale = config.get_locale();
    assert_eq!(locale.language, "de");
    assert_eq!(locale.time_format, TimeFormat::TwentyFourHour);
    assert_eq!(locale.utc_offset_minutes, 60);
    assert_eq!(config.get_relative_time_cutoff_days(), 7);
    assert!(config.get_narrow());
    assert!(config.is_component_loaded("blueprint"));
}

#[test]
fn test_config_serialization_skips_unset_fields() {
    let json = serde_json::to_string(&PickerConfig::default()).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"narrow": true}}"#).unwrap();
    let config = load_config_from(file.path());
    assert!(config.get_narrow());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("nope.json"));
    assert_eq!(config, PickerConfig::default());
}

#[test]
fn test_invalid_file_uses_defaults_and_read_reports_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert_eq!(load_config_from(file.path()), PickerConfig::default());
    assert!(matches!(
        read_config(file.path()),
        Err(crate::error::PickerError::Config(_))
    ));
}
