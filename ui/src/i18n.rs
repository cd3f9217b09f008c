//! Built-in UI strings for `galleria-ui`.
//!
//! Site copy (headings, nav labels, about text) comes from `translation.json`
//! at runtime; see [`crate::core::language`]. This module covers the strings
//! the app itself owns: the loading placeholder, the gallery failure message
//! and the aria labels on icon buttons.
//!
//! Wiring:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/galleria-ui.ftl   (fallback/reference)
//!   ar-SA/galleria-ui.ftl
//! ```
//!
//! Usage in a component:
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let label = crate::t!("modal-close-label");
//! ```
//!
//! The page controller switches the bundle whenever the content language
//! changes, so both sources stay on the same language.
use std::sync::Once;

use dioxus::logger::tracing;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("gallery-loading")` looks the id up in [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
}

/// Bundle file stem, matching `domain` in `i18n.toml`.
const DOMAIN: &str = "galleria-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch the bundle to `tag`. An unparseable tag leaves it unchanged.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// Serialises tests that switch the global bundle language.
#[cfg(test)]
pub(crate) static LOCALE_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::language::Language;

    #[test]
    fn both_content_languages_have_a_bundle() {
        let langs = available_languages();
        for lang in [Language::En, Language::Ar] {
            assert!(
                langs.iter().any(|l| l == lang.locale_tag()),
                "missing bundle for {}",
                lang.locale_tag()
            );
        }
    }

    #[test]
    fn fallback_failure_message() {
        let _guard = LOCALE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        init();
        set_language("en-US").unwrap();
        assert_eq!(crate::t!("gallery-load-failed"), "Failed to load gallery.");
    }

    #[test]
    fn unparseable_tag_is_ignored() {
        let _guard = LOCALE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        init();
        assert!(set_language("not a tag!").is_ok());
    }
}
