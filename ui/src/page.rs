//! The page controller: every piece of page state as a Dioxus signal, plus
//! the named transitions the DOM events are bound to.
//!
//! Built once by [`use_page_controller`] in the root component and shared via
//! context. Signals are `Copy`, so the controller is too; handlers capture it
//! by value.

use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::chrome::{anchor_target, ChromeState};
use crate::core::config::{DARK_MODE_CLASS, GALLERY_PATH, SCROLLED_CLASS, TRANSLATIONS_PATH};
use crate::core::fetch;
use crate::core::gallery::{ArtworkRecord, GalleryState};
use crate::core::language::{Language, LanguageStore, PageText, TranslationTable};
use crate::core::modal::{KeyAction, ModalNavigator};
use crate::core::platform;
use crate::core::storage::LocalStore;
use crate::core::theme::{Theme, ThemeStore};
use crate::i18n;

#[derive(Clone, Copy, PartialEq)]
pub struct PageController {
    pub gallery: Signal<GalleryState>,
    pub modal: Signal<ModalNavigator>,
    pub translations: Signal<TranslationTable>,
    pub page_text: Signal<PageText>,
    pub language: Signal<Language>,
    pub theme: Signal<Theme>,
    pub chrome: Signal<ChromeState>,
}

/// Create the controller, provide it as context and apply the startup theme
/// and document language.
pub fn use_page_controller() -> PageController {
    let gallery = use_signal(GalleryState::default);
    let modal = use_signal(ModalNavigator::default);
    let translations = use_signal(TranslationTable::default);
    let page_text = use_signal(PageText::default);
    let language = use_signal(|| LanguageStore::new(&LocalStore).initial());
    let theme = use_signal(|| ThemeStore::new(&LocalStore).initial(platform::prefers_dark_scheme()));
    let chrome = use_signal(ChromeState::default);

    let page = PageController {
        gallery,
        modal,
        translations,
        page_text,
        language,
        theme,
        chrome,
    };
    use_context_provider(|| page);

    use_hook(move || {
        i18n::init();
        let theme = *page.theme.peek();
        let lang = *page.language.peek();
        platform::set_body_class(DARK_MODE_CLASS, theme.is_dark());
        page.sync_document_language(lang);
    });

    page
}

/// Controller provided by an ancestor's [`use_page_controller`].
pub fn use_page() -> PageController {
    use_context::<PageController>()
}

/// Kick off the two independent startup fetches.
pub fn use_startup_loads(page: PageController) {
    use_future(move || async move { page.load_translations().await });
    use_future(move || async move { page.load_gallery().await });
}

impl PageController {
    // --- Gallery ---

    pub async fn load_gallery(self) {
        let result = fetch::get_json::<Vec<ArtworkRecord>>(GALLERY_PATH).await;
        match &result {
            Ok(records) => tracing::info!("[gallery] loaded {} artworks", records.len()),
            Err(err) => tracing::error!("[gallery] Error loading gallery: {err}"),
        }
        let mut gallery = self.gallery;
        gallery.set(GalleryState::from_fetch(result));
    }

    // --- Modal ---

    /// Only entry point that makes the modal visible.
    pub fn open(self, index: usize) {
        let len = self.gallery.peek().len();
        let mut modal = self.modal;
        if modal.with_mut(|nav| nav.open(index, len)) {
            self.sync_scroll_lock();
        }
    }

    /// Only entry point that hides the modal.
    pub fn close(self) {
        let mut modal = self.modal;
        if modal.with_mut(|nav| nav.close()) {
            self.sync_scroll_lock();
        }
    }

    pub fn next(self) {
        let len = self.gallery.peek().len();
        let mut modal = self.modal;
        modal.with_mut(|nav| nav.next(len));
    }

    pub fn prev(self) {
        let len = self.gallery.peek().len();
        let mut modal = self.modal;
        modal.with_mut(|nav| nav.prev(len));
    }

    pub fn handle_key(self, key: &str) {
        let len = self.gallery.peek().len();
        let mut modal = self.modal;
        if modal.with_mut(|nav| nav.handle_key(key, len)) == KeyAction::Close {
            self.sync_scroll_lock();
        }
    }

    /// Record shown in the modal, if open.
    pub fn current_artwork(&self) -> Option<ArtworkRecord> {
        let index = self.modal.read().current()?;
        self.gallery.read().get(index).cloned()
    }

    // --- Language ---

    pub async fn load_translations(self) {
        match fetch::get_json::<TranslationTable>(TRANSLATIONS_PATH).await {
            Ok(table) => {
                if table.is_empty() {
                    tracing::warn!("[i18n] translation table is empty");
                } else {
                    tracing::info!("[i18n] loaded {} translation keys", table.len());
                }
                let mut translations = self.translations;
                translations.set(table);
                let lang = *self.language.peek();
                self.set_language(lang);
            }
            Err(err) => tracing::error!("[i18n] Could not load translations: {err}"),
        }
    }

    pub fn set_language(self, lang: Language) {
        LanguageStore::new(&LocalStore).persist(lang);

        let mut language = self.language;
        language.set(lang);

        let mut page_text = self.page_text;
        let table = self.translations.peek();
        page_text.with_mut(|text| text.apply(&table, lang));

        self.sync_document_language(lang);
    }

    pub fn toggle_language(self) {
        let next = self.language.peek().other();
        self.set_language(next);
    }

    /// Text for a translation-tagged element.
    pub fn text(&self, key: &str, source: &str) -> String {
        self.page_text.read().resolve(key, source).to_string()
    }

    fn sync_document_language(self, lang: Language) {
        platform::set_document_language(lang.code(), lang.direction());
        if let Err(err) = i18n::set_language(lang.locale_tag()) {
            tracing::warn!("[i18n] bundle switch to {} failed: {err}", lang.locale_tag());
        }
    }

    // --- Theme ---

    pub fn apply_theme(self, theme: Theme) {
        let mut current = self.theme;
        current.set(theme);
        platform::set_body_class(DARK_MODE_CLASS, theme.is_dark());
    }

    /// The dark-mode checkbox changed.
    pub fn on_theme_toggled(self, checked: bool) {
        let theme = Theme::from_toggle(checked);
        ThemeStore::new(&LocalStore).persist(theme);
        self.apply_theme(theme);
    }

    // --- Chrome ---

    pub fn on_scroll(self, offset_y: f64) {
        // Scroll fires constantly; only write when the flag flips.
        let mut next = *self.chrome.peek();
        if next.on_scroll(offset_y) {
            let mut chrome = self.chrome;
            chrome.set(next);
            platform::set_body_class(SCROLLED_CLASS, next.scrolled);
        }
    }

    pub fn toggle_menu(self) {
        let mut chrome = self.chrome;
        chrome.with_mut(ChromeState::toggle_menu);
        self.sync_scroll_lock();
    }

    pub fn close_menu(self) {
        let mut chrome = self.chrome;
        chrome.with_mut(ChromeState::close_menu);
        self.sync_scroll_lock();
    }

    /// In-page link clicked: smooth-scroll instead of jumping.
    pub fn follow_anchor(self, href: &str) {
        if let Some(id) = anchor_target(href) {
            platform::smooth_scroll_to(id);
        }
    }

    /// Body scroll stays locked while the modal or the mobile menu is open.
    pub fn scroll_locked(&self) -> bool {
        let modal_open = self.modal.peek().is_open();
        self.chrome.peek().body_locked(modal_open)
    }

    fn sync_scroll_lock(self) {
        platform::set_body_scroll_locked(self.scroll_locked());
    }
}

/// Raw browser events forwarded into the page coroutine.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Key(String),
    Scroll(f64),
}

/// Install the document `keydown` and window `scroll` listeners for the page
/// lifetime.
pub fn use_page_listeners(page: PageController) {
    let events = use_coroutine(move |mut rx: UnboundedReceiver<PageEvent>| async move {
        while let Some(event) = rx.next().await {
            match event {
                PageEvent::Key(key) => page.handle_key(&key),
                PageEvent::Scroll(offset) => page.on_scroll(offset),
            }
        }
    });

    let _listeners = use_hook(move || Rc::new(install_listeners(events.tx())));
}

#[cfg(target_arch = "wasm32")]
fn install_listeners(
    tx: futures_channel::mpsc::UnboundedSender<PageEvent>,
) -> Vec<gloo_events::EventListener> {
    use gloo_events::EventListener;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Some(document) = window.document() else {
        return Vec::new();
    };

    let key_tx = tx.clone();
    let keydown = EventListener::new(&document, "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
            let _ = key_tx.unbounded_send(PageEvent::Key(event.key()));
        }
    });

    let scroll_window = window.clone();
    let scroll = EventListener::new(&window, "scroll", move |_| {
        let offset = scroll_window.scroll_y().unwrap_or(0.0);
        let _ = tx.unbounded_send(PageEvent::Scroll(offset));
    });

    vec![keydown, scroll]
}

#[cfg(not(target_arch = "wasm32"))]
fn install_listeners(tx: futures_channel::mpsc::UnboundedSender<PageEvent>) -> Vec<()> {
    // No window on the host; events only arrive through the coroutine.
    drop(tx);
    Vec::new()
}
