use dioxus::prelude::*;

/// Hero banner: the page title over the slogan served by the API.
#[component]
pub fn Hero(
    #[props(default, into)] title: String,
    #[props(default, into)] slogan: String,
) -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "hero__title", "{title}" }
            p { class: "hero__slogan", "{slogan}" }
        }
    }
}
