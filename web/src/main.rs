use dioxus::prelude::*;

use ui::components::{ArtModal, SiteHeader};
use ui::core::chrome::root_class;
use ui::page::{use_page_controller, use_page_listeners, use_startup_loads};
use ui::views::Home;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Theme, language and document attributes are applied on construction.
    let page = use_page_controller();
    use_page_listeners(page);
    use_startup_loads(page);

    let theme = *page.theme.read();
    let chrome = *page.chrome.read();
    let lang = *page.language.read();
    let class = root_class(theme.is_dark(), chrome.scrolled);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "{class}",
            lang: lang.code(),
            dir: lang.direction().as_str(),
            SiteHeader {}
            Home {}
            ArtModal {}
        }
    }
}
