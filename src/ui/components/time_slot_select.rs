use crate::booking::TimeSlot;
use dioxus::prelude::*;
use tracing::debug;

/// Dropdown over the fixed slot labels
#[component]
pub fn TimeSlotSelect(
    #[props(!optional)] selected: Option<TimeSlot>,
    on_select: EventHandler<TimeSlot>,
) -> Element {
    rsx! {
        div { class: "field-with-icon",
            span { class: "field-icon", "🕒" }
            select {
                id: "time",
                class: "field-input",
                value: selected.map(|s| s.label()).unwrap_or_default(),
                onchange: move |event: FormEvent| match event.value().parse::<TimeSlot>() {
                    Ok(slot) => on_select.call(slot),
                    Err(e) => debug!("Ignoring slot selection: {}", e),
                },
                option {
                    value: "",
                    disabled: true,
                    selected: selected.is_none(),
                    "Choose a time slot"
                }
                for slot in TimeSlot::ALL {
                    option {
                        key: "{slot}",
                        value: slot.label(),
                        selected: selected == Some(slot),
                        "{slot}"
                    }
                }
            }
        }
    }
}
