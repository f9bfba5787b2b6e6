//! Application configuration shared through the Dioxus context.

use dioxus::prelude::*;

/// Title shown in the hero heading of every routed page.
pub const PROJECT_TITLE: &str = "RedEagle Project";

/// Endpoint queried once per page mount for the slogan payload.
pub const DEFAULT_INFO_URL: &str = "http://localhost:4000/api/info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub title: String,
    pub info_url: String,
}

impl AppConfig {
    /// Defaults, with the info endpoint overridable at build time through
    /// `REDEAGLE_INFO_URL` (a browser bundle has no runtime environment).
    pub fn from_build_env() -> Self {
        Self {
            info_url: option_env!("REDEAGLE_INFO_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(DEFAULT_INFO_URL)
                .to_string(),
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: PROJECT_TITLE.to_string(),
            info_url: DEFAULT_INFO_URL.to_string(),
        }
    }
}

/// Config provided by the launcher, or the defaults when none was provided.
pub fn use_app_config() -> AppConfig {
    try_use_context::<AppConfig>().unwrap_or_default()
}
