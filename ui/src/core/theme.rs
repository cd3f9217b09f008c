//! Light/dark preference resolution and persistence.

use crate::core::config::THEME_KEY;
use crate::core::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Theme represented by the toggle's checked state.
    pub fn from_toggle(checked: bool) -> Self {
        if checked {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Persisted value, then OS preference, then light.
pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Theme {
    match saved.and_then(Theme::parse) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Reads and writes the `theme` entry of a [`PreferenceStore`].
pub struct ThemeStore<'a, S: PreferenceStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: PreferenceStore + ?Sized> ThemeStore<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn initial(&self, prefers_dark: bool) -> Theme {
        resolve(self.store.get(THEME_KEY).as_deref(), prefers_dark)
    }

    pub fn persist(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }
}
