//! Content language selection and text substitution from `translation.json`.
//!
//! The table maps a translation key to per-language strings:
//! ```json
//! { "hero-title": { "en": "Original works", "ar": "أعمال أصلية" } }
//! ```
//! Elements tagged with a key show their source text until a lookup for the
//! active language succeeds. A missing entry leaves whatever text the element
//! already had, so switching to a language with gaps never blanks anything.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::core::config::LANGUAGE_KEY;
use crate::core::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    /// Locale used for the embedded Fluent bundle.
    pub fn locale_tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Ar => "ar-SA",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Label for the toggle: the code of the language a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self.other() {
            Language::En => "EN",
            Language::Ar => "AR",
        }
    }
}

/// `translation.json`: key -> language code -> text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable(HashMap<String, HashMap<String, String>>);

impl TranslationTable {
    pub fn lookup(&self, key: &str, lang: Language) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|langs| langs.get(lang.code()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Current text of every translation-tagged element, by key.
///
/// Keys absent here render their source markup text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageText {
    replaced: BTreeMap<String, String>,
}

impl PageText {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.replaced.get(key).map(String::as_str)
    }

    /// Text to display for `key`, falling back to the element's source text.
    pub fn resolve<'a>(&'a self, key: &str, source: &'a str) -> &'a str {
        self.get(key).unwrap_or(source)
    }

    /// Overwrite every key the table can translate into `lang`.
    pub fn apply(&mut self, table: &TranslationTable, lang: Language) {
        for (key, langs) in &table.0 {
            if let Some(text) = langs.get(lang.code()) {
                self.replaced.insert(key.clone(), text.clone());
            }
        }
    }
}

/// Reads and writes the `language` entry of a [`PreferenceStore`].
pub struct LanguageStore<'a, S: PreferenceStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: PreferenceStore + ?Sized> LanguageStore<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn initial(&self) -> Language {
        self.store
            .get(LANGUAGE_KEY)
            .as_deref()
            .and_then(Language::parse)
            .unwrap_or_default()
    }

    pub fn persist(&self, lang: Language) {
        self.store.set(LANGUAGE_KEY, lang.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use serde_json::json;

    fn table() -> TranslationTable {
        serde_json::from_value(json!({
            "hero-title": { "en": "Original works", "ar": "أعمال أصلية" },
            "about-body": { "en": "Painter based in Amman." }
        }))
        .unwrap()
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Language::Ar.direction(), Direction::Rtl);
        assert_eq!(Language::En.direction(), Direction::Ltr);
        assert_eq!(Language::Ar.direction().as_str(), "rtl");
    }

    #[test]
    fn toggle_label_names_the_inactive_language() {
        assert_eq!(Language::En.toggle_label(), "AR");
        assert_eq!(Language::Ar.toggle_label(), "EN");
        for lang in [Language::En, Language::Ar] {
            assert_ne!(lang.toggle_label().to_lowercase(), lang.code());
        }
    }

    #[test]
    fn missing_translation_keeps_prior_text() {
        let table = table();
        let mut text = PageText::default();

        text.apply(&table, Language::En);
        assert_eq!(text.get("about-body"), Some("Painter based in Amman."));

        text.apply(&table, Language::Ar);
        assert_eq!(text.get("hero-title"), Some("أعمال أصلية"));
        assert_eq!(text.get("about-body"), Some("Painter based in Amman."));
    }

    #[test]
    fn empty_table_leaves_source_text() {
        let mut text = PageText::default();
        text.apply(&TranslationTable::default(), Language::Ar);
        assert_eq!(text.resolve("hero-title", "Original works"), "Original works");
    }

    #[test]
    fn table_lookup_by_language_code() {
        let table = table();
        assert_eq!(table.lookup("hero-title", Language::En), Some("Original works"));
        assert_eq!(table.lookup("about-body", Language::Ar), None);
        assert_eq!(table.lookup("nope", Language::En), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn stored_language_defaults_to_english() {
        let store = MemoryStore::default();
        let langs = LanguageStore::new(&store);
        assert_eq!(langs.initial(), Language::En);

        langs.persist(Language::Ar);
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("ar"));
        assert_eq!(langs.initial(), Language::Ar);

        store.set(LANGUAGE_KEY, "fr");
        assert_eq!(langs.initial(), Language::En);
    }
}
