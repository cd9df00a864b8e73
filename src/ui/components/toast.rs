use crate::notify::{expire_toast, Severity, Toast};
use dioxus::prelude::*;

use super::toast_context::use_toast;

#[component]
pub fn ToastViewport() -> Element {
    let toasts = use_toast().toasts();

    rsx! {
        div { class: "toast-viewport",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

/// Single toast; dismisses itself after a few seconds
#[component]
fn ToastItem(toast: Toast) -> Element {
    let ctx = use_toast();
    let id = toast.id;

    use_hook(move || {
        spawn(expire_toast(id, move |id| ctx.dismiss(id)));
    });

    let class = match toast.notification.severity {
        Severity::Default => "toast",
        Severity::Destructive => "toast toast-destructive",
    };

    rsx! {
        div { class,
            div { class: "toast-body",
                p { class: "toast-title", "{toast.notification.title}" }
                p { class: "toast-description", "{toast.notification.description}" }
            }
            button {
                class: "toast-close",
                r#type: "button",
                onclick: move |_| ctx.dismiss(id),
                "✕"
            }
        }
    }
}
