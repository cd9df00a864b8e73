use dioxus::prelude::*;

use super::booking_form::BookingForm;

/// Full-height page that centres the booking form
#[component]
pub fn BookingPage() -> Element {
    rsx! {
        div { class: "booking-page", BookingForm {} }
    }
}
