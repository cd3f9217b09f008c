use dioxus::prelude::*;

use crate::core::gallery::{ArtworkRecord, GalleryState};
use crate::page::use_page;
use crate::t;

const GALLERY_CSS: Asset = asset!("/assets/styling/gallery.css");

/// `#galleryContainer`: loading placeholder, then either the masonry grid or
/// the failure message. Each state replaces the previous content wholesale.
#[component]
pub fn GalleryGrid() -> Element {
    let page = use_page();
    // Built-in strings follow the language signal.
    let _lang = *page.language.read();
    let gallery = page.gallery.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: GALLERY_CSS }

        div { id: "galleryContainer", class: "gallery-container",
            match gallery {
                GalleryState::Loading => rsx! {
                    p { class: "gallery-status", {t!("gallery-loading")} }
                },
                GalleryState::Failed => rsx! {
                    p { class: "gallery-status gallery-status--error", {t!("gallery-load-failed")} }
                },
                GalleryState::Loaded(records) => rsx! {
                    div { class: "masonry-gallery",
                        for (index, art) in records.iter().enumerate() {
                            GalleryTile { key: "{index}", index: index, art: art.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn GalleryTile(index: usize, art: ArtworkRecord) -> Element {
    let page = use_page();

    rsx! {
        div { class: "gallery-item", onclick: move |_| page.open(index),
            img { src: "{art.image_thumb}", alt: "{art.title}", "loading": "lazy" }
            div { class: "gallery-info",
                h3 { "{art.title}" }
            }
        }
    }
}
