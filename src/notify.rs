//! Transient user-facing notifications.

use crate::booking::TimeSlot;
use crate::dates::format_long;
use crate::timer;
use chrono::NaiveDate;
use std::time::Duration;

/// Most toasts shown at once; older ones are dropped
pub const TOAST_LIMIT: usize = 3;

/// How long a toast stays up unless dismissed
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    pub fn missing_fields() -> Self {
        Self::new(
            "Missing fields",
            "Please fill in all fields.",
            Severity::Destructive,
        )
    }

    pub fn booked(date: NaiveDate, time: TimeSlot) -> Self {
        Self::new(
            "✅ Appointment Booked!",
            format!(
                "Your appointment on {} at {} is confirmed.",
                format_long(date),
                time
            ),
            Severity::Default,
        )
    }

    pub fn slot_unavailable() -> Self {
        Self::new(
            "Slot Unavailable",
            "This time slot is already taken. Please choose another.",
            Severity::Destructive,
        )
    }

    pub fn server_error() -> Self {
        Self::new(
            "Server Error",
            "Something went wrong. Please try again.",
            Severity::Destructive,
        )
    }
}

/// A surface that shows notifications without blocking the caller
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Visible toasts, newest first, never more than `TOAST_LIMIT`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Show a notification on top, pushing the oldest out past the limit.
    /// Returns the new toast's id.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.insert(0, Toast { id, notification });
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Wait out `TOAST_DURATION`, then hand the toast id to `dismiss`
pub async fn expire_toast<F: FnOnce(u64)>(id: u64, dismiss: F) {
    timer::sleep(TOAST_DURATION).await;
    dismiss(id);
}
