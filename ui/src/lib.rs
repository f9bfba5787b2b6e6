//! Shared UI crate for RedEagle. The landing page, its data loader and the
//! route table live here; platform crates only launch them.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod loader;
pub mod routes;
pub mod views;

pub mod components {
    // Logo strip at the top of every page (components/site_header.rs)
    pub mod site_header;
    pub use site_header::SiteHeader;

    // "Resources" / "Help" link columns (components/resource_links.rs)
    pub mod resource_links;
    pub use resource_links::{ResourceColumn, ResourceLink};
}

mod hero;
pub use hero::Hero;

pub use routes::Route;

/// Shared theme, linked by the web launcher and inlined by desktop.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
