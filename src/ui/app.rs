use dioxus::prelude::*;

use crate::ui::components::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    BookingPage {},
}

#[cfg(feature = "desktop")]
pub fn make_config() -> dioxus::desktop::Config {
    dioxus::desktop::Config::default().with_window(make_window())
}

#[cfg(feature = "desktop")]
fn make_window() -> dioxus::desktop::WindowBuilder {
    dioxus::desktop::WindowBuilder::new()
        .with_title("Book Your Appointment")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(560, 820))
}
