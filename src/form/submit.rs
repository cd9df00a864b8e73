//! Submission flow without any UI attached.
//!
//! `start` and `finish` are the two synchronous halves of a submission, so a
//! renderer that cannot hold the form across an await (a signal, say) can
//! drive the same steps as `submit`.

use crate::booking::{BookingBackend, BookingError, BookingReply, BookingRequest};
use crate::form::state::{Completion, FormState, ResetTicket, SubmitRejected, RESET_DELAY};
use crate::notify::Notifier;
use crate::timer;
use tracing::debug;

/// Validate the fields and move to `Loading`.
///
/// A validation failure is reported to the notifier. A `Busy` rejection is
/// silent.
pub fn start<N>(form: &mut FormState, notifier: &N) -> Result<BookingRequest, SubmitRejected>
where
    N: Notifier + ?Sized,
{
    form.begin_submit().map_err(|rejected| {
        debug!("Submission rejected: {}", rejected);
        if let Some(notification) = rejected.notification() {
            notifier.notify(notification);
        }
        rejected
    })
}

/// Apply the result of the request `start` returned and report it
pub fn finish<N>(
    form: &mut FormState,
    request: &BookingRequest,
    result: Result<BookingReply, BookingError>,
    notifier: &N,
) -> Completion
where
    N: Notifier + ?Sized,
{
    let completion = form.complete(request, result);
    notifier.notify(completion.notification.clone());
    completion
}

/// Validate, send and apply one booking.
pub async fn submit<B, N>(
    form: &mut FormState,
    backend: &B,
    notifier: &N,
) -> Result<Completion, SubmitRejected>
where
    B: BookingBackend + ?Sized,
    N: Notifier + ?Sized,
{
    let request = start(form, notifier)?;
    let result = backend.book(&request).await;
    Ok(finish(form, &request, result, notifier))
}

/// Wait out the reset delay, then hand the ticket to `reset`.
///
/// Returns whatever `reset` reports, i.e. whether the ticket still applied.
pub async fn reset_after_delay<F>(ticket: ResetTicket, reset: F) -> bool
where
    F: FnOnce(ResetTicket) -> bool,
{
    timer::sleep(RESET_DELAY).await;
    reset(ticket)
}

/// Wait out the reset delay, then return the form to idle if the
/// completion is still the latest.
pub async fn settle(form: &mut FormState, completion: &Completion) -> bool {
    reset_after_delay(completion.reset, |ticket| form.reset(ticket)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::TimeSlot;
    use crate::form::state::SubmitOutcome;
    use crate::form::status::SubmissionStatus;
    use crate::notify::Notification;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::cell::{Cell, RefCell};

    struct CannedBackend {
        status: &'static str,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl BookingBackend for CannedBackend {
        async fn book(&self, _request: &BookingRequest) -> Result<BookingReply, BookingError> {
            self.calls.set(self.calls.get() + 1);
            Ok(BookingReply {
                status: Some(Value::String(self.status.to_string())),
                message: None,
            })
        }
    }

    #[derive(Default)]
    struct Shown(RefCell<Vec<Notification>>);

    impl Notifier for Shown {
        fn notify(&self, notification: Notification) {
            self.0.borrow_mut().push(notification);
        }
    }

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.fields.name = "Asha".to_string();
        form.fields.phone = "+911234567890".to_string();
        form.fields.date = NaiveDate::from_ymd_opt(2025, 7, 1);
        form.fields.time = Some(TimeSlot::ElevenAm);
        form
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_settles_after_delay() {
        let backend = CannedBackend {
            status: "success",
            calls: Cell::new(0),
        };
        let shown = Shown::default();
        let mut form = filled();

        let completion = submit(&mut form, &backend, &shown).await.unwrap();
        assert_eq!(completion.outcome, SubmitOutcome::Booked);
        assert_eq!(backend.calls.get(), 1);
        assert_eq!(shown.0.borrow().len(), 1);

        let started = tokio::time::Instant::now();
        assert!(settle(&mut form, &completion).await);
        assert!(started.elapsed() >= RESET_DELAY);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_missing_fields_skip_backend() {
        let backend = CannedBackend {
            status: "success",
            calls: Cell::new(0),
        };
        let shown = Shown::default();
        let mut form = FormState::new();

        assert!(submit(&mut form, &backend, &shown).await.is_err());
        assert_eq!(backend.calls.get(), 0);
        assert_eq!(*shown.0.borrow(), vec![Notification::missing_fields()]);
    }

    #[test]
    fn test_start_reports_missing_fields_once() {
        let shown = Shown::default();
        let mut form = filled();
        form.fields.date = None;

        assert!(matches!(
            start(&mut form, &shown),
            Err(SubmitRejected::Invalid(_))
        ));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(*shown.0.borrow(), vec![Notification::missing_fields()]);
    }

    #[test]
    fn test_start_while_loading_is_silent() {
        let shown = Shown::default();
        let mut form = filled();
        start(&mut form, &shown).unwrap();

        assert_eq!(start(&mut form, &shown), Err(SubmitRejected::Busy));
        assert!(shown.0.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_reset_left_running_is_a_no_op() {
        let backend = CannedBackend {
            status: "taken",
            calls: Cell::new(0),
        };
        let shown = Shown::default();
        let form = RefCell::new(filled());

        let (cell, shown, backend) = (&form, &shown, &backend);
        let run = move || async move {
            let request = start(&mut cell.borrow_mut(), shown).unwrap();
            let result = backend.book(&request).await;
            finish(&mut cell.borrow_mut(), &request, result, shown)
        };

        let first = run().await;

        // Resubmit half way through the first reset delay, without
        // cancelling that reset
        let stale = reset_after_delay(first.reset, |ticket| form.borrow_mut().reset(ticket));
        let retry = async {
            tokio::time::sleep(RESET_DELAY / 2).await;
            run().await
        };
        let (applied, second) = tokio::join!(stale, retry);

        assert!(!applied);
        assert_eq!(form.borrow().status(), SubmissionStatus::Error);
        assert!(reset_after_delay(second.reset, |ticket| form.borrow_mut().reset(ticket)).await);
        assert_eq!(form.borrow().status(), SubmissionStatus::Idle);
        assert_eq!(backend.calls.get(), 2);
    }
}
