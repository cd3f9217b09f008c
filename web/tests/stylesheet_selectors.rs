#![cfg(test)]
/*!
Stylesheet selector lint for the web build.

Purpose:
- Ensure the classes and ids toggled from Rust (`dark-mode`, `scrolled`,
  `active`, the modal and gallery structure) keep a matching rule in the
  stylesheets, so a rename on one side fails here instead of silently
  unstyling the page.

How it works:
- The root theme (`web/assets/main.css`) and the component sheets under
  `ui/assets/styling/` are embedded with `include_str!`.
- Each required selector is checked by substring presence.

If you intentionally rename a selector, update the component markup and the
lists below together.
*/

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));
const HEADER_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/header.css"
));
const GALLERY_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/gallery.css"
));
const MODAL_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/modal.css"
));

fn assert_selectors(sheet_name: &str, sheet: &str, required: &[&str]) {
    let missing: Vec<_> = required
        .iter()
        .filter(|sel| !sheet.contains(**sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required selectors in {sheet_name}:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn root_theme_covers_dark_mode_and_layout() {
    assert_selectors(
        "main.css",
        MAIN_CSS,
        &[
            ":root",
            "body {",
            "body.dark-mode",
            ".page-root.dark-mode",
            ".page {",
            ".hero",
            ".section",
            ".button--primary",
            ".visually-hidden",
            "@media (max-width: 720px)",
        ],
    );
}

#[test]
fn header_sheet_covers_scroll_and_menu_states() {
    assert_selectors(
        "header.css",
        HEADER_CSS,
        &[
            ".site-header.scrolled",
            "body.scrolled .site-header",
            ".hamburger.active",
            ".mobile-nav.active",
            ".theme-switch input:checked",
            ".language-toggle",
        ],
    );
}

#[test]
fn gallery_sheet_covers_tiles() {
    assert_selectors(
        "gallery.css",
        GALLERY_CSS,
        &[
            ".masonry-gallery",
            ".gallery-item",
            ".gallery-info",
            ".gallery-status--error",
        ],
    );
}

#[test]
fn modal_sheet_covers_lightbox() {
    assert_selectors(
        "modal.css",
        MODAL_CSS,
        &[".modal {", ".modal-content", ".modal__close", ".modal__nav-button"],
    );
}

#[test]
fn root_theme_not_trivially_empty() {
    let non_ws_len = MAIN_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 1_500,
        "Root theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}
