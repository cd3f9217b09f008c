use dioxus::prelude::*;

use crate::page::use_page;

/// Text tagged with a translation key.
///
/// Shows `source` until `translation.json` provides a string for the active
/// language, then keeps the last substituted string.
#[component]
pub fn Translate(name: &'static str, source: &'static str) -> Element {
    let page = use_page();
    let text = page.text(name, source);

    rsx! {
        span { "data-translate": name, "{text}" }
    }
}
