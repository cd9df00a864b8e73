pub mod stub_server;

pub use stub_server::{RecordedRequest, StubServer};

use booking::booking::TimeSlot;
use booking::notify::{Notification, Notifier};
use booking::FormState;
use chrono::NaiveDate;
use std::cell::RefCell;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Notifier that keeps everything it is shown
#[derive(Default)]
pub struct RecordingNotifier {
    shown: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.borrow().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.shown.borrow().iter().map(|n| n.title.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.shown.borrow_mut().push(notification);
    }
}

/// Form filled in the way the example booking is
pub fn asha_form() -> FormState {
    let mut form = FormState::new();
    form.fields.name = "Asha".to_string();
    form.fields.phone = "+911234567890".to_string();
    form.fields.date = NaiveDate::from_ymd_opt(2025, 7, 1);
    form.fields.time = Some(TimeSlot::ElevenAm);
    form
}
