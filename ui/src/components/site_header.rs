use crate::core::config::ACTIVE_CLASS;
use crate::page::use_page;
use crate::t;
use dioxus::prelude::*;

use super::Translate;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// One in-page section linked from the header and the mobile nav.
#[derive(Clone, Copy)]
struct NavItem {
    href: &'static str,
    name: &'static str,
    source: &'static str,
}

const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        href: "#home",
        name: "nav-home",
        source: "Home",
    },
    NavItem {
        href: "#gallery",
        name: "nav-gallery",
        source: "Gallery",
    },
    NavItem {
        href: "#about",
        name: "nav-about",
        source: "About",
    },
    NavItem {
        href: "#contact",
        name: "nav-contact",
        source: "Contact",
    },
];

/// Fixed header: brand, section links, dark-mode switch, language toggle and
/// the hamburger that drives the mobile nav.
///
/// The dark-mode checkbox mirrors the current theme; its `change` event
/// persists and applies the new one. The language toggle always shows the
/// code of the language a click switches to.
#[component]
pub fn SiteHeader() -> Element {
    let page = use_page();

    let chrome = *page.chrome.read();
    let theme = *page.theme.read();
    let lang = *page.language.read();

    let header_class = if chrome.scrolled {
        "site-header scrolled"
    } else {
        "site-header"
    };
    let active = if chrome.menu_open { ACTIVE_CLASS } else { "" };
    let toggle_label = lang.toggle_label();

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        header { id: "site-header", class: "{header_class}",
            div { class: "site-header__inner",
                a {
                    class: "site-header__brand",
                    href: "#home",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        page.follow_anchor("#home");
                    },
                    Translate { name: "brand-name", source: "Galleria" }
                }

                nav { class: "site-header__links",
                    for item in NAV_ITEMS {
                        AnchorLink {
                            key: "{item.href}",
                            href: item.href,
                            name: item.name,
                            source: item.source,
                            in_mobile_nav: false,
                        }
                    }
                }

                div { class: "site-header__controls",
                    label { class: "theme-switch", r#for: "dark-mode-toggle",
                        span { class: "visually-hidden", {t!("theme-toggle-label")} }
                        input {
                            id: "dark-mode-toggle",
                            r#type: "checkbox",
                            checked: theme.is_dark(),
                            onchange: move |evt: FormEvent| page.on_theme_toggled(evt.checked()),
                        }
                        span { class: "theme-switch__slider", aria_hidden: "true" }
                    }

                    button {
                        id: "language-toggle",
                        r#type: "button",
                        class: "language-toggle",
                        aria_label: t!("language-toggle-label"),
                        onclick: move |_| page.toggle_language(),
                        "{toggle_label}"
                    }

                    button {
                        id: "hamburger-menu",
                        r#type: "button",
                        class: "hamburger {active}",
                        aria_label: t!("menu-toggle-label"),
                        aria_expanded: chrome.menu_open,
                        onclick: move |_| page.toggle_menu(),
                        span { class: "hamburger__bar" }
                        span { class: "hamburger__bar" }
                        span { class: "hamburger__bar" }
                    }
                }
            }
        }

        nav { id: "mobile-nav", class: "mobile-nav {active}",
            for item in NAV_ITEMS {
                AnchorLink {
                    key: "{item.href}",
                    href: item.href,
                    name: item.name,
                    source: item.source,
                    in_mobile_nav: true,
                }
            }
        }
    }
}

#[component]
fn AnchorLink(
    href: &'static str,
    name: &'static str,
    source: &'static str,
    in_mobile_nav: bool,
) -> Element {
    let page = use_page();

    rsx! {
        a {
            class: "nav-link",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                if in_mobile_nav {
                    page.close_menu();
                }
                page.follow_anchor(href);
            },
            Translate { name: name, source: source }
        }
    }
}
