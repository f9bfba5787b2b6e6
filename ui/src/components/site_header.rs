use dioxus::prelude::*;

const PHOENIX_LOGO: Asset = asset!("/assets/images/phoenix.svg");
const DIOXUS_LOGO: Asset = asset!("/assets/images/dioxus.svg");
const DOCKER_LOGO: Asset = asset!("/assets/images/docker.svg");

/// Logo strip: the API framework, the UI library and the container platform.
#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header { class: "site-header",
            section { class: "container site-header__logos",
                div { class: "site-header__logo",
                    img { src: PHOENIX_LOGO, alt: "Phoenix Framework" }
                }
                div { class: "site-header__logo",
                    img { src: DIOXUS_LOGO, alt: "Dioxus" }
                }
                div { class: "site-header__logo",
                    img { src: DOCKER_LOGO, alt: "Docker" }
                }
            }
        }
    }
}
