use crate::booking::BookingClient;
use crate::config::Config;
use crate::ui::{Route, MAIN_CSS};
use dioxus::prelude::*;
use tracing::debug;

use super::toast_context::ToastProvider;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    // Read once at startup; the client below is immutable from here on
    let config = use_hook(Config::load);
    use_context_provider(|| BookingClient::new(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ToastProvider {
            Router::<Route> {}
        }
    }
}
