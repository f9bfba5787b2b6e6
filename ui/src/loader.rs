//! Fetch-on-mount for the landing page's `Info`.

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::client::InfoClient;
use crate::core::config::use_app_config;
use crate::core::info::Info;

/// Owns the page's `Info` state and schedules exactly one load for it.
///
/// The load runs as a task of the calling scope, so unmounting the page
/// cancels it. A result that still arrives after the signal was dropped is
/// discarded instead of written.
pub fn use_info() -> Signal<Info> {
    let config = use_app_config();
    let provided = try_use_context::<InfoClient>();
    let info = use_signal(Info::default);

    use_future(move || {
        let client = provided
            .clone()
            .unwrap_or_else(|| InfoClient::http(config.info_url.clone()));
        let url = config.info_url.clone();
        let mut info = info;

        async move {
            match client.fetch().await {
                Ok(loaded) => match info.try_write() {
                    Ok(mut slot) => {
                        debug!(%url, keys = loaded.len(), "info loaded");
                        *slot = loaded;
                    }
                    Err(_) => debug!(%url, "page dropped before info arrived; discarding"),
                },
                Err(err) => warn!(%url, %err, "failed to load info"),
            }
        }
    });

    info
}
