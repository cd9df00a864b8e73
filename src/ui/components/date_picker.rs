use crate::calendar::{self, CalendarMonth};
use crate::dates::format_long;
use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use tracing::debug;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Popover calendar that only offers today and later
#[component]
pub fn DatePicker(
    #[props(!optional)] selected: Option<NaiveDate>,
    on_select: EventHandler<NaiveDate>,
) -> Element {
    let mut is_open = use_signal(|| false);
    let today = calendar::today();
    let mut month = use_signal(|| CalendarMonth::containing(selected.unwrap_or(today)));

    let label = selected
        .map(format_long)
        .unwrap_or_else(|| "Pick a date".to_string());
    let trigger_class = if selected.is_some() {
        "picker-trigger"
    } else {
        "picker-trigger picker-placeholder"
    };

    rsx! {
        div { class: "date-picker",
            button {
                r#type: "button",
                class: trigger_class,
                onclick: move |_| is_open.toggle(),
                span { class: "field-icon", "📅" }
                "{label}"
            }

            if is_open() {
                div { class: "popover",
                    div { class: "calendar-header",
                        button {
                            r#type: "button",
                            class: "calendar-nav",
                            onclick: move |_| month.set(month().prev()),
                            "‹"
                        }
                        span { class: "calendar-title", "{month().title()}" }
                        button {
                            r#type: "button",
                            class: "calendar-nav",
                            onclick: move |_| month.set(month().next()),
                            "›"
                        }
                    }
                    table { class: "calendar-grid",
                        thead {
                            tr {
                                for name in WEEKDAYS {
                                    th { key: "{name}", "{name}" }
                                }
                            }
                        }
                        tbody {
                            for week in month().weeks() {
                                tr {
                                    for cell in week {
                                        td {
                                            if let Some(day) = cell {
                                                CalendarDay {
                                                    day,
                                                    today,
                                                    is_selected: selected == Some(day),
                                                    on_pick: move |day| {
                                                        on_select.call(day);
                                                        is_open.set(false);
                                                    },
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CalendarDay(
    day: NaiveDate,
    today: NaiveDate,
    is_selected: bool,
    on_pick: EventHandler<NaiveDate>,
) -> Element {
    let selectable = calendar::is_selectable(day, today);
    let class = match (is_selected, day == today) {
        (true, _) => "calendar-day calendar-day-selected",
        (false, true) => "calendar-day calendar-day-today",
        _ => "calendar-day",
    };

    rsx! {
        button {
            r#type: "button",
            class,
            disabled: !selectable,
            onclick: move |_| match calendar::select(day, today) {
                Ok(day) => on_pick.call(day),
                Err(e) => debug!("Refusing date: {}", e),
            },
            "{day.day()}"
        }
    }
}
