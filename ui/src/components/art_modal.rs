use dioxus::prelude::*;

use crate::page::use_page;
use crate::t;

const MODAL_CSS: Asset = asset!("/assets/styling/modal.css");

/// `#artModal` lightbox.
///
/// Visibility is derived from the navigator state, so `open`/`close` on the
/// page controller are the only ways to show or hide it. Clicks on the dark
/// backdrop close it; clicks inside `.modal-content` stop there.
#[component]
pub fn ArtModal() -> Element {
    let page = use_page();
    let _lang = *page.language.read();
    let current = page.current_artwork();
    let display = if current.is_some() { "block" } else { "none" };

    rsx! {
        document::Link { rel: "stylesheet", href: MODAL_CSS }

        div {
            id: "artModal",
            class: "modal",
            style: "display: {display};",
            onclick: move |_| page.close(),

            div {
                class: "modal-content",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                button {
                    id: "closeModal",
                    r#type: "button",
                    class: "modal__close",
                    aria_label: t!("modal-close-label"),
                    onclick: move |_| page.close(),
                    "×"
                }

                if let Some(art) = current {
                    img { id: "modalImage", class: "modal__image", src: "{art.image_full}", alt: "{art.title}" }
                    div { class: "modal__info",
                        h2 { id: "modalTitle", "{art.title}" }
                        p { id: "modalDescription", "{art.description}" }
                    }
                }

                div { class: "modal__nav",
                    button {
                        id: "prevArt",
                        r#type: "button",
                        class: "modal__nav-button",
                        aria_label: t!("modal-prev-label"),
                        onclick: move |_| page.prev(),
                        "‹"
                    }
                    button {
                        id: "nextArt",
                        r#type: "button",
                        class: "modal__nav-button",
                        aria_label: t!("modal-next-label"),
                        onclick: move |_| page.next(),
                        "›"
                    }
                }
            }
        }
    }
}
