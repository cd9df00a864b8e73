use crate::booking::{BookingBackend, BookingClient};
use crate::form::{finish, reset_after_delay, start, FormState};
use dioxus::core::Task;
use dioxus::prelude::*;

use super::date_picker::DatePicker;
use super::time_slot_select::TimeSlotSelect;
use super::toast_context::use_toast;

/// Appointment form: collects the four fields, submits them and shows the
/// outcome on the button and as a toast.
///
/// The request and the auto-reset run on tasks owned by this component, so
/// neither touches state after it unmounts.
#[component]
pub fn BookingForm() -> Element {
    let client = use_context::<BookingClient>();
    let toasts = use_toast();
    let mut form = use_signal(FormState::new);
    let mut reset_task = use_signal(|| None::<Task>);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        let Ok(request) = start(&mut form.write(), &toasts) else {
            return;
        };

        // The ticket already makes an old reset a no-op; cancelling just
        // drops the timer early
        if let Some(task) = reset_task.take() {
            task.cancel();
        }

        let client = client.clone();
        spawn(async move {
            let result = client.book(&request).await;
            let completion = finish(&mut form.write(), &request, result, &toasts);

            let task = spawn(async move {
                reset_after_delay(completion.reset, |ticket| form.write().reset(ticket)).await;
            });
            reset_task.set(Some(task));
        });
    };

    let (fields, status) = {
        let state = form.read();
        (state.fields.clone(), state.status())
    };

    rsx! {
        div { class: "booking-card",
            div { class: "booking-header",
                div { class: "booking-badge", "📅" }
                h2 { class: "booking-title", "Book Your Appointment" }
                p { class: "booking-subtitle",
                    "Choose a date and time that works best for you"
                }
            }

            form { class: "booking-form", onsubmit: on_submit,
                div { class: "field",
                    label { r#for: "name", class: "field-label", "Full Name" }
                    div { class: "field-with-icon",
                        span { class: "field-icon", "👤" }
                        input {
                            id: "name",
                            class: "field-input",
                            placeholder: "Enter your name",
                            value: "{fields.name}",
                            required: true,
                            oninput: move |event: FormEvent| {
                                form.write().fields.name = event.value();
                            },
                        }
                    }
                }

                div { class: "field",
                    label { r#for: "phone", class: "field-label", "Phone Number" }
                    div { class: "field-with-icon",
                        span { class: "field-icon", "📞" }
                        input {
                            id: "phone",
                            r#type: "tel",
                            class: "field-input",
                            placeholder: "+91XXXXXXXXXX",
                            value: "{fields.phone}",
                            required: true,
                            oninput: move |event: FormEvent| {
                                form.write().fields.phone = event.value();
                            },
                        }
                    }
                }

                div { class: "field",
                    label { class: "field-label", "Select Date" }
                    DatePicker {
                        selected: fields.date,
                        on_select: move |day| {
                            form.write().fields.date = Some(day);
                        },
                    }
                }

                div { class: "field",
                    label { class: "field-label", "Select Time" }
                    TimeSlotSelect {
                        selected: fields.time,
                        on_select: move |slot| {
                            form.write().fields.time = Some(slot);
                        },
                    }
                }

                button {
                    r#type: "submit",
                    class: "submit-button",
                    disabled: status.is_busy(),
                    "{status.button_label()}"
                }
            }
        }
    }
}
