//! Booking form state machine, independent of any renderer.

pub mod fields;
pub mod state;
pub mod status;
pub mod submit;

pub use fields::{Field, FormFields, ValidationError};
pub use state::{
    Completion, FailureKind, FormState, ResetTicket, SubmitOutcome, SubmitRejected, RESET_DELAY,
};
pub use status::SubmissionStatus;
pub use submit::{finish, reset_after_delay, settle, start, submit};
