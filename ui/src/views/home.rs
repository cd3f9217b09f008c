use dioxus::prelude::*;

use crate::components::{GalleryGrid, Translate};
use crate::page::use_page;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing translation refresh issues.
    dioxus::logger::tracing::debug!("[i18n] Home render (lang={lang})");
}

/// The single-page layout: hero, gallery, about, contact, footer.
#[component]
pub fn Home() -> Element {
    let page = use_page();
    let _lang = *page.language.read();

    #[cfg(debug_assertions)]
    {
        log_home_render(_lang.code());
    }

    rsx! {
        main { class: "page page-home",
            section { id: "home", class: "hero",
                h1 { class: "hero__title",
                    Translate { name: "hero-title", source: "Original works on paper and canvas" }
                }
                p { class: "hero__subtitle",
                    Translate { name: "hero-subtitle", source: "Paintings, drawings and studies from the studio." }
                }
                a {
                    class: "button button--primary",
                    href: "#gallery",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        page.follow_anchor("#gallery");
                    },
                    Translate { name: "hero-cta", source: "View the gallery" }
                }
            }

            section { id: "gallery", class: "section section-gallery",
                h2 { Translate { name: "gallery-title", source: "Gallery" } }
                GalleryGrid {}
            }

            section { id: "about", class: "section section-about",
                h2 { Translate { name: "about-title", source: "About" } }
                p { Translate { name: "about-body", source: "I paint landscapes and portraits, mostly in oil, and sketch daily in ink." } }
            }

            section { id: "contact", class: "section section-contact",
                h2 { Translate { name: "contact-title", source: "Contact" } }
                p { Translate { name: "contact-body", source: "For commissions and exhibitions, write to studio@galleria.art." } }
            }

            footer { class: "site-footer",
                p { Translate { name: "footer-note", source: "All artworks © the artist." } }
            }
        }
    }
}
