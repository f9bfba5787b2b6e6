//! Client-side route table. Every path renders the same landing page.

use dioxus::prelude::*;

use crate::core::config::use_app_config;
use crate::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

impl Route {
    pub fn all() -> [Route; 3] {
        [Route::Landing {}, Route::Login {}, Route::Register {}]
    }
}

#[component]
pub fn Landing() -> Element {
    project_home()
}

#[component]
pub fn Login() -> Element {
    project_home()
}

#[component]
pub fn Register() -> Element {
    project_home()
}

fn project_home() -> Element {
    let config = use_app_config();
    rsx! {
        Home { title: config.title }
    }
}
