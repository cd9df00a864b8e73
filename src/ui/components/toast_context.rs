use crate::notify::{Notification, Notifier, Toast, ToastQueue};
use dioxus::prelude::*;

use super::toast::ToastViewport;

/// Shared toast queue for every component under `ToastProvider`
#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: Signal<ToastQueue>,
}

impl ToastContext {
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.read().toasts().to_vec()
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }
}

impl Notifier for ToastContext {
    fn notify(&self, notification: Notification) {
        let mut queue = self.queue;
        queue.write().push(notification);
    }
}

/// Provider component that owns the toast queue and renders it
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| ToastContext { queue });

    rsx! {
        {children}
        ToastViewport {}
    }
}

/// Hook to push notifications from any component under the provider
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
}
