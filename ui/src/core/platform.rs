//! Document-level side effects that live outside the Dioxus tree.
//!
//! Every function is a no-op off wasm so the state types stay host-testable.

use crate::core::language::Direction;

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Whether the OS reports a dark colour-scheme preference.
pub fn prefers_dark_scheme() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = document().and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(class, enabled);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (class, enabled);
    }
}

/// Lock or release page scrolling via `body.style.overflow`.
pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = document().and_then(|d| d.body()) {
            let value = if locked { "hidden" } else { "" };
            let _ = body.style().set_property("overflow", value);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locked;
    }
}

/// Set `lang` and `dir` on the document element.
pub fn set_document_language(code: &str, direction: Direction) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute("lang", code);
            let _ = root.set_attribute("dir", direction.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (code, direction);
    }
}

/// Smoothly scroll the element with `id` into view. Unknown ids are ignored.
pub fn smooth_scroll_to(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(target) = document().and_then(|d| d.get_element_by_id(id)) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}
