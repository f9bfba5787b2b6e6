use dioxus::prelude::*;

use crate::components::resource_links::{help, resources};
use crate::components::{ResourceColumn, SiteHeader};
use crate::core::info::Info;
use crate::loader::use_info;
use crate::{i18n, t, Hero};

/// Landing page markup for a given title and `Info`. Pure: no loading.
#[component]
pub fn LandingPage(
    #[props(default, into)] title: String,
    #[props(default)] info: Info,
) -> Element {
    i18n::init();

    rsx! {
        SiteHeader {}
        main { class: "container page page-home",
            Hero { title, slogan: info.slogan() }
            section { class: "row",
                ResourceColumn { heading: t!("resources-heading"), links: resources() }
                ResourceColumn { heading: t!("help-heading"), links: help() }
            }
        }
    }
}

/// Mounted landing page: owns its `Info` and loads it once on first render.
#[component]
pub fn Home(#[props(default, into)] title: String) -> Element {
    let info = use_info();

    rsx! {
        LandingPage { title, info: info() }
    }
}
