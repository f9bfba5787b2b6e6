use dioxus::prelude::*;

use ui::core::config::AppConfig;
use ui::{Route, THEME_CSS};

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    use_context_provider(AppConfig::from_build_env);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: THEME_CSS }

        Router::<Route> {}
    }
}
