use dioxus::prelude::*;

use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceLink {
    pub label: String,
    pub href: &'static str,
}

impl ResourceLink {
    pub fn new(label: impl Into<String>, href: &'static str) -> Self {
        Self {
            label: label.into(),
            href,
        }
    }
}

/// Framework documentation and project sources.
pub fn resources() -> Vec<ResourceLink> {
    vec![
        ResourceLink::new(
            t!("link-guides"),
            "https://hexdocs.pm/phoenix/overview.html",
        ),
        ResourceLink::new(t!("link-source"), "https://github.com/phoenixframework/phoenix"),
        ResourceLink::new(
            t!("link-changelog"),
            "https://github.com/guiferreira/redeagle_new",
        ),
    ]
}

/// Community channels.
pub fn help() -> Vec<ResourceLink> {
    vec![
        ResourceLink::new(t!("link-forum"), "https://elixirforum.com/c/phoenix-forum"),
        ResourceLink::new(t!("link-slack"), "https://elixir-slackin.herokuapp.com/"),
        ResourceLink::new(t!("link-discord"), "https://discord.gg/elixir"),
    ]
}

#[component]
pub fn ResourceColumn(heading: String, links: Vec<ResourceLink>) -> Element {
    rsx! {
        article { class: "column resource-column",
            h2 { "{heading}" }
            ul {
                for link in links {
                    li { key: "{link.href}",
                        a { href: link.href, "{link.label}" }
                    }
                }
            }
        }
    }
}
