use dioxus::prelude::*;

use ui::components::{AppFooter, AppNavbar};
use ui::core::{browser, lang};
use ui::nav::Navigator;
use ui::views::PageOutlet;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Pages are an in-memory concept: the address bar never changes, and a
    // reload always lands on home. Only the language preference persists.
    let lang_signal = use_context_provider(|| Signal::new(lang::initial()));
    let _navigator = Navigator::provide();

    use_hook(|| {
        // Persisted preference wins over the browser's requested list.
        let initial = *lang_signal.peek();
        lang::apply(initial);
        browser::arm_header_scroll_listener();
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppNavbar {}
        main { id: browser::PAGE_SHELL_ID, class: "page-shell loaded",
            PageOutlet {}
        }
        AppFooter {}
    }
}
