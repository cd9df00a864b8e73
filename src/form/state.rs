use crate::booking::{BookingError, BookingReply, BookingRequest};
use crate::form::fields::{FormFields, ValidationError};
use crate::form::status::SubmissionStatus;
use crate::notify::Notification;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// How long success and error states stay visible before returning to idle
pub const RESET_DELAY: Duration = Duration::from_secs(3);

/// Identifies the submission a pending auto-reset belongs to.
///
/// A reset only applies while its submission is still the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("A booking request is already in flight")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl SubmitRejected {
    /// Busy rejections are silent; the button is disabled anyway
    pub fn notification(&self) -> Option<Notification> {
        match self {
            SubmitRejected::Busy => None,
            SubmitRejected::Invalid(_) => Some(Notification::missing_fields()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Server answered but did not confirm the booking
    SlotConflict,
    /// Request failed or the reply was not JSON
    Transport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Booked,
    Failed(FailureKind),
}

/// Result of a finished request
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub outcome: SubmitOutcome,
    pub notification: Notification,
    pub reset: ResetTicket,
}

/// Fields plus submission status of one booking form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub fields: FormFields,
    status: SubmissionStatus,
    generation: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Validate the fields and move to `Loading`.
    ///
    /// On rejection nothing changes, including the status.
    pub fn begin_submit(&mut self) -> Result<BookingRequest, SubmitRejected> {
        if self.status.is_busy() {
            debug!("Ignoring submit while a booking request is in flight");
            return Err(SubmitRejected::Busy);
        }

        let request = self.fields.to_request()?;
        self.generation += 1;
        self.status = SubmissionStatus::Loading;
        debug!("Submission {} started", self.generation);
        Ok(request)
    }

    /// Apply the result of the request started by `begin_submit`
    pub fn complete(
        &mut self,
        request: &BookingRequest,
        result: Result<BookingReply, BookingError>,
    ) -> Completion {
        if !self.status.is_busy() {
            warn!(
                "Completing submission {} from {:?}",
                self.generation, self.status
            );
        }

        let (outcome, notification) = match result {
            Ok(reply) if reply.is_confirmed() => {
                self.status = SubmissionStatus::Success;
                self.fields.clear();
                (
                    SubmitOutcome::Booked,
                    Notification::booked(request.date, request.time),
                )
            }
            Ok(_) => {
                self.status = SubmissionStatus::Error;
                (
                    SubmitOutcome::Failed(FailureKind::SlotConflict),
                    Notification::slot_unavailable(),
                )
            }
            Err(e) => {
                warn!("Booking request failed: {}", e);
                self.status = SubmissionStatus::Error;
                (
                    SubmitOutcome::Failed(FailureKind::Transport),
                    Notification::server_error(),
                )
            }
        };

        debug!(
            "Submission {} finished as {:?}",
            self.generation, self.status
        );

        Completion {
            outcome,
            notification,
            reset: ResetTicket(self.generation),
        }
    }

    /// Return to `Idle` if the ticket still belongs to the latest submission.
    ///
    /// Returns whether the reset was applied.
    pub fn reset(&mut self, ticket: ResetTicket) -> bool {
        if ticket.0 != self.generation || !self.status.is_settled() {
            debug!(
                "Dropping stale reset for submission {} (current {})",
                ticket.0, self.generation
            );
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}
