// Library exports for integration tests and the app binary

pub mod booking;
pub mod calendar;
pub mod config;
pub mod dates;
pub mod form;
pub mod notify;
pub mod timer;

// UI components (hidden from docs)
#[doc(hidden)]
pub mod ui;

pub use config::Config;
pub use form::{FormState, SubmissionStatus};
