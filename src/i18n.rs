//! Localization
//!
//! Column titles, menu labels and dialog texts are looked up by dotted key
//! through a `Localize` implementation. Templates use `%{name}`
//! placeholders. A missing key renders as the key itself.

use std::collections::HashMap;

use rust_i18n::t;

/// Translation lookup supplied by the host
pub trait Localize: Send + Sync {
    fn localize(&self, key: &str, args: &[(&str, &str)]) -> String;
}

/// Replace every `%{name}` placeholder with its argument.
/// Placeholders without an argument are left untouched.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("%{{{}}}", name), value);
    }
    out
}

/// Translations compiled into the binary from `locales/`.
#[derive(Debug, Clone)]
pub struct BundledLocalizer {
    language: String,
}

impl BundledLocalizer {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for BundledLocalizer {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Localize for BundledLocalizer {
    fn localize(&self, key: &str, args: &[(&str, &str)]) -> String {
        let template = t!(key, locale = self.language.as_str());
        interpolate(&template, args)
    }
}

/// Translations handed over at runtime, e.g. fetched from the backend.
#[derive(Debug, Clone, Default)]
pub struct MapLocalizer {
    entries: HashMap<String, String>,
}

impl MapLocalizer {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Localize for MapLocalizer {
    fn localize(&self, key: &str, args: &[(&str, &str)]) -> String {
        match self.entries.get(key) {
            Some(template) => interpolate(template, args),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_replaces_named_placeholders() {
        assert_eq!(
            interpolate("Triggered %{name}", &[("name", "Wake up")]),
            "Triggered Wake up"
        );
        assert_eq!(interpolate("%{a} and %{b}", &[("a", "1")]), "1 and %{b}");
    }

    #[test]
    fn test_map_localizer_falls_back_to_key() {
        let localizer = MapLocalizer::from_pairs([("greeting", "Hi %{name}")]);
        assert_eq!(localizer.localize("greeting", &[("name", "Ada")]), "Hi Ada");
        assert_eq!(localizer.localize("missing.key", &[]), "missing.key");
    }

    #[test]
    fn test_bundled_english_strings() {
        let localizer = BundledLocalizer::default();
        assert_eq!(
            localizer.localize("ui.components.relative_time.never", &[]),
            "Never"
        );
        assert_eq!(
            localizer.localize(
                "ui.panel.config.script.editor.load_error_unknown",
                &[("err_no", "500")]
            ),
            "Error loading script (500)."
        );
    }
}
